// SPDX-License-Identifier: MPL-2.0

//! Default values for the toaster configuration.
//!
//! Centralizes all fallback values so they stay consistent between the
//! `Default` implementations, serde deserialization and documentation.

// === Lifecycle ===

/// How long a toast stays on screen before auto-dismissal (milliseconds).
pub const DEFAULT_SHOW_DURATION_MS: u64 = 4000;

/// Maximum number of toasts shown at once. Requests beyond the limit wait
/// in a queue until a slot frees up.
pub const DEFAULT_LIMIT: i32 = 5;

/// Interval of the tick subscription that drives dismissal timers and
/// animations (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// === Diagnostics ===

/// Default capacity of the in-memory diagnostic event buffer.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 1000;

/// Minimum allowed capacity of the diagnostic event buffer.
pub const MIN_EVENT_BUFFER_CAPACITY: usize = 100;

/// Maximum allowed capacity of the diagnostic event buffer.
pub const MAX_EVENT_BUFFER_CAPACITY: usize = 10_000;

// Compile-time validation of default values
const _: () = {
    assert!(DEFAULT_LIMIT > 0, "default limit must admit at least one toast");
    assert!(TICK_INTERVAL_MS > 0, "tick interval must be non-zero");
    assert!(
        DEFAULT_SHOW_DURATION_MS >= TICK_INTERVAL_MS,
        "show duration must be observable by the tick subscription"
    );
    assert!(
        MIN_EVENT_BUFFER_CAPACITY <= DEFAULT_EVENT_BUFFER_CAPACITY
            && DEFAULT_EVENT_BUFFER_CAPACITY <= MAX_EVENT_BUFFER_CAPACITY,
        "default event buffer capacity must lie within its bounds"
    );
};
