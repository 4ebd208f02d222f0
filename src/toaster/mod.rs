// SPDX-License-Identifier: MPL-2.0
//! The toast engine: admission, stacking, and lifecycle.
//!
//! This module owns everything that decides *when* and *where* a toast is
//! shown; rendering lives in [`crate::ui`]. Toasts appear temporarily to
//! inform users about events (save success, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` and `Severity`, the input side
//! - [`manager`] - the `Toaster` owning shown cards, the waiting queue and
//!   stacking positions
//! - [`timer`] - cancellable one-shot dismissal timers
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::toaster::Toaster;
//!
//! let mut toaster = Toaster::default();
//!
//! // Request toasts from anywhere in update()
//! toaster.success("image saved");
//! toaster.error("export failed");
//!
//! // In your view function, render the overlay
//! let overlay = ui::overlay::view(&toaster, now).map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Show duration: 4s by default, configurable
//! - Max shown toasts: 5 by default (others wait in a queue)
//! - Position: stacked up from the bottom-left corner, newest at the bottom
//! - A close button is optional chrome, off by default

pub mod manager;
pub mod request;
pub mod timer;

pub use manager::{offset_for_position, Message, ShownEntry, Toaster};
pub use request::{Severity, ToastId, ToastRequest};
pub use timer::DismissTimers;
