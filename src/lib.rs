// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification engine for the Iced GUI framework.
//!
//! It manages the full lifecycle of transient notification cards: admission
//! into a bounded on-screen stack, a FIFO queue for overflow, timed and
//! manual dismissal, and slide-in/fade-in presentation.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toaster;
pub mod ui;
