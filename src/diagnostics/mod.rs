// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for toast lifecycle activity.
//!
//! This module provides lightweight instrumentation for the toaster:
//! typed lifecycle events, a memory-bounded circular buffer, and a
//! collector/handle pair connected by a bounded channel.
//!
//! The [`Toaster`](crate::toaster::Toaster) never logs on its own. A host
//! that wants visibility creates a [`DiagnosticsCollector`], installs a
//! [`DiagnosticsHandle`] via
//! [`set_diagnostics`](crate::toaster::Toaster::set_diagnostics), and drains
//! the collector periodically:
//!
//! ```
//! use iced_toaster::diagnostics::DiagnosticsCollector;
//! use iced_toaster::toaster::Toaster;
//!
//! let mut collector = DiagnosticsCollector::default();
//! let mut toaster = Toaster::default();
//! toaster.set_diagnostics(collector.handle());
//!
//! toaster.error("disk full");
//! collector.process_pending();
//! assert_eq!(collector.len(), 1);
//! ```
//!
//! Sends are non-blocking; if the channel fills up faster than the host
//! drains it, excess events are dropped rather than stalling the UI.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ToastEvent, ToastEventKind};
