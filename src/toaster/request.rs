// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastRequest` struct and `Severity` enum
//! used throughout the toaster.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and icon artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Something went wrong (red accent).
    Error,
    /// Something needs attention but nothing is broken (yellow accent).
    Warning,
    /// Operation completed successfully (green accent).
    Success,
    /// Neutral informational message (blue accent).
    #[default]
    Information,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR,
            Severity::Warning => palette::WARNING,
            Severity::Success => palette::SUCCESS,
            Severity::Information => palette::INFORMATION,
        }
    }
}

/// A request to show a toast.
///
/// Requests are created by the host (usually through the convenience
/// constructors) and handed to the toaster, which either shows them
/// immediately or parks them in the waiting queue.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    /// Unique identifier for this toast.
    id: ToastId,
    /// Severity level (determines accent color and icon).
    severity: Severity,
    /// The message text displayed on the card.
    message: String,
}

impl ToastRequest {
    /// Creates a new toast request with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message: message.into(),
        }
    }

    /// Creates an error toast request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning toast request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a success toast request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an information toast request.
    pub fn information(message: impl Into<String>) -> Self {
        Self::new(Severity::Information, message)
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
