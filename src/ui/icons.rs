// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the built-in toast artwork.
//!
//! Icons are single-color SVG glyphs embedded in the binary. They use
//! `currentColor` fills and are tinted at render time, so one source serves
//! every accent color. Handles are cached using `OnceLock` so the SVG is
//! parsed once on first access and reused thereafter.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let badge = icons::tinted(icons::warning(), severity.color());
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use crate::toaster::Severity;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

// =============================================================================
// Embedded SVG sources
// =============================================================================

const ERROR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path fill-rule="evenodd" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 2a8 8 0 1 1 0 16 8 8 0 0 1 0-16z"/><rect x="11" y="6.5" width="2" height="7.5" rx="1"/><circle cx="12" cy="16.75" r="1.25"/></svg>"##;

const WARNING_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path fill-rule="evenodd" d="M12 2.5 1.5 20.5h21L12 2.5zm0 4L18.9 18.5H5.1L12 6.5z"/><rect x="11" y="9.5" width="2" height="5" rx="1"/><circle cx="12" cy="16.5" r="1.1"/></svg>"##;

const SUCCESS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M9.55 16.2 5.35 12l-1.4 1.4 5.6 5.6 11.3-11.3-1.4-1.4z"/></svg>"##;

const INFORMATION_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path fill-rule="evenodd" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 2a8 8 0 1 1 0 16 8 8 0 0 1 0-16z"/><rect x="11" y="10" width="2" height="7.5" rx="1"/><circle cx="12" cy="7.25" r="1.25"/></svg>"##;

const CROSS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"/></svg>"##;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Severity Icons
// =============================================================================

define_icon!(
    error,
    ERROR_SVG,
    "Error icon: exclamation mark in a circle."
);
define_icon!(
    warning,
    WARNING_SVG,
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    success,
    SUCCESS_SVG,
    "Success icon: check/tick mark."
);
define_icon!(
    information,
    INFORMATION_SVG,
    "Information icon: letter 'i' in circle."
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(cross, CROSS_SVG, "Cross icon: X mark shape.");

/// Returns the built-in icon for a severity level, untinted.
pub fn for_severity(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Error => error(),
        Severity::Warning => warning(),
        Severity::Success => success(),
        Severity::Information => information(),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon in a single color, replacing its `currentColor` fills.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
