// SPDX-License-Identifier: MPL-2.0
//! Reusable toast card template.
//!
//! The skeleton is built once per toaster from the configuration. It fixes
//! the parts of a card that never change between toasts (close chrome and
//! the close icon artwork) and carries the mutable slots (severity, message,
//! icon) that the stamp fills in before cloning an independent card out.
//! Cards already on screen hold their own copies, so refilling the slots
//! for the next toast never touches them.

use crate::config::ToasterConfig;
use crate::toaster::{Severity, ToastId};
use crate::ui::card::{CloseButton, IconSource, ToastCard};
use std::time::Instant;

/// The card template with its fill-in slots.
#[derive(Debug, Clone)]
pub struct ToastSkeleton {
    /// Whether stamped cards carry a close button.
    close_chrome: bool,
    /// Close icon artwork, resolved once from the configuration.
    close_icon: IconSource,
    // Slots refilled for every stamped toast.
    severity: Severity,
    message: String,
    icon: IconSource,
}

impl ToastSkeleton {
    /// Builds the template from the toaster configuration.
    pub fn from_config(config: &ToasterConfig) -> Self {
        Self {
            close_chrome: config.show_close_button,
            close_icon: IconSource::from_override(config.icons.for_close()),
            severity: Severity::default(),
            message: String::new(),
            icon: IconSource::BuiltIn,
        }
    }

    /// Whether stamped cards carry a close button.
    #[must_use]
    pub fn has_close_chrome(&self) -> bool {
        self.close_chrome
    }

    pub(crate) fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub(crate) fn set_message(&mut self, message: &str) {
        self.message.clear();
        self.message.push_str(message);
    }

    pub(crate) fn set_icon(&mut self, icon: IconSource) {
        self.icon = icon;
    }

    /// Clones the filled slots into an independent card.
    pub(crate) fn clone_card(&self, id: ToastId, stamped_at: Instant) -> ToastCard {
        ToastCard::new(
            id,
            self.severity,
            self.message.clone(),
            self.severity.color(),
            self.icon.clone(),
            stamped_at,
        )
    }

    /// Clones the close button for a card, if close chrome is configured.
    pub(crate) fn clone_close_button(&self, target: ToastId) -> Option<CloseButton> {
        self.close_chrome
            .then(|| CloseButton::new(target, self.close_icon.clone()))
    }
}
