// SPDX-License-Identifier: MPL-2.0
//! Stamps independent toast cards out of the skeleton.
//!
//! The stamper owns the skeleton and the configured icon overrides. For each
//! request it fills the skeleton's slots (severity, message, resolved icon)
//! and clones the result into a [`StampedToast`]: the card itself plus its
//! close button when close chrome is configured. The two come back separately
//! so the caller owns the dismissal wiring.

use crate::config::{IconOverrides, ToasterConfig};
use crate::toaster::ToastRequest;
use crate::ui::card::{CloseButton, IconSource, ToastCard};
use crate::ui::skeleton::ToastSkeleton;
use std::time::Instant;

/// A freshly stamped card and its optional close button.
#[derive(Debug, Clone)]
pub struct StampedToast {
    /// The independent card, ready to be shown.
    pub card: ToastCard,
    /// The close button, present when close chrome is configured.
    pub close_button: Option<CloseButton>,
}

/// Fills the skeleton and clones cards out of it.
#[derive(Debug, Clone)]
pub struct Stamper {
    skeleton: ToastSkeleton,
    icons: IconOverrides,
}

impl Stamper {
    /// Builds a stamper (and its skeleton) from the toaster configuration.
    pub fn new(config: &ToasterConfig) -> Self {
        Self {
            skeleton: ToastSkeleton::from_config(config),
            icons: config.icons.clone(),
        }
    }

    /// Returns the underlying template.
    #[must_use]
    pub fn skeleton(&self) -> &ToastSkeleton {
        &self.skeleton
    }

    /// Stamps a card for `request`, with `now` as the start of its entrance
    /// animation.
    pub fn stamp(&mut self, request: &ToastRequest, now: Instant) -> StampedToast {
        let severity = request.severity();

        self.skeleton.set_severity(severity);
        self.skeleton.set_message(request.message());
        self.skeleton
            .set_icon(IconSource::from_override(self.icons.for_severity(severity)));

        StampedToast {
            card: self.skeleton.clone_card(request.id(), now),
            close_button: self.skeleton.clone_close_button(request.id()),
        }
    }
}
