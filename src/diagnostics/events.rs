// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle event types.
//!
//! Each event records one transition in a toast's life: entering the shown
//! collection, waiting in the queue, being promoted, and the various ways a
//! toast leaves the screen.

use std::time::Instant;

use crate::toaster::{Severity, ToastId};

/// A recorded lifecycle event with its timestamp.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The kind and data of the event.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ToastEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }

    /// A toast entered the shown collection.
    #[must_use]
    pub fn admitted(id: ToastId, severity: Severity) -> Self {
        Self::new(ToastEventKind::Admitted { id, severity })
    }

    /// A toast arrived while the shown collection was full and joined the
    /// waiting queue.
    #[must_use]
    pub fn queued(id: ToastId, severity: Severity) -> Self {
        Self::new(ToastEventKind::Queued { id, severity })
    }

    /// A waiting toast was admitted after a slot opened up.
    #[must_use]
    pub fn promoted(id: ToastId, severity: Severity) -> Self {
        Self::new(ToastEventKind::Promoted { id, severity })
    }

    /// A toast was dismissed because its display duration elapsed.
    #[must_use]
    pub fn auto_dismissed(id: ToastId, severity: Severity) -> Self {
        Self::new(ToastEventKind::AutoDismissed { id, severity })
    }

    /// A toast was dismissed through its close control.
    #[must_use]
    pub fn manually_dismissed(id: ToastId, severity: Severity) -> Self {
        Self::new(ToastEventKind::ManuallyDismissed { id, severity })
    }

    /// All shown and waiting toasts were dropped at once.
    #[must_use]
    pub fn cleared(count: usize) -> Self {
        Self::new(ToastEventKind::Cleared { count })
    }

    /// A non-positive configured limit was replaced with the default.
    #[must_use]
    pub fn limit_normalized(configured: i32, effective: usize) -> Self {
        Self::new(ToastEventKind::LimitNormalized {
            configured,
            effective,
        })
    }
}

/// The kind and associated data for a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A toast entered the shown collection at position one.
    Admitted {
        /// The toast's identifier.
        id: ToastId,
        /// The toast's severity.
        severity: Severity,
    },

    /// A toast joined the waiting queue because the shown collection was
    /// at its limit.
    Queued {
        /// The toast's identifier.
        id: ToastId,
        /// The toast's severity.
        severity: Severity,
    },

    /// A waiting toast moved into the shown collection.
    Promoted {
        /// The toast's identifier.
        id: ToastId,
        /// The toast's severity.
        severity: Severity,
    },

    /// A shown toast expired after its display duration.
    AutoDismissed {
        /// The toast's identifier.
        id: ToastId,
        /// The toast's severity.
        severity: Severity,
    },

    /// A shown toast was closed by the user.
    ManuallyDismissed {
        /// The toast's identifier.
        id: ToastId,
        /// The toast's severity.
        severity: Severity,
    },

    /// Every pending toast was dropped.
    Cleared {
        /// How many toasts (shown and waiting) were dropped.
        count: usize,
    },

    /// The configured limit was out of range and fell back to the default.
    LimitNormalized {
        /// The value read from configuration.
        configured: i32,
        /// The limit actually applied.
        effective: usize,
    },
}
