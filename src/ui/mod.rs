// SPDX-License-Identifier: MPL-2.0
//! Rendering components for the toaster.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern: the
//! [`crate::toaster`] module owns the state, these components only draw it
//! and emit [`crate::toaster::Message`]s.
//!
//! # Components
//!
//! - [`skeleton`] - Reusable card template with fill-in slots
//! - [`stamp`] - Stamps independent cards out of the skeleton
//! - [`card`] - The toast card widget and its styles
//! - [`overlay`] - Absolute placement of shown cards over the host view
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG artwork and tinting helpers

pub mod card;
pub mod design_tokens;
pub mod icons;
pub mod overlay;
pub mod skeleton;
pub mod stamp;
