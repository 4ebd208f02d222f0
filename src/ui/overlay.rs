// SPDX-License-Identifier: MPL-2.0
//! Toast overlay: absolute placement of shown cards.
//!
//! Every shown card becomes one transparent stack layer pinned to the
//! bottom-left window corner. The layer's padding encodes the card's
//! animated offsets: the eased bottom offset from its stacking position and
//! the horizontal entrance slide. The window edge clips a card that is
//! still partly off screen, so the off-screen share of the slide is
//! rendered as a growing reveal of the card's right portion.

use crate::toaster::{Message, ShownEntry, Toaster};
use crate::ui::design_tokens::{animation, sizing, spacing};
use iced::widget::{text, Container, Stack};
use iced::{alignment, Element, Length, Padding};
use std::time::Instant;

/// Renders the toast overlay with every shown card at its animated offset.
///
/// Returns an empty, zero-sized element while nothing is shown, so hosts
/// can unconditionally push the overlay onto their view stack.
pub fn view(toaster: &Toaster, now: Instant) -> Element<'_, Message> {
    if toaster.shown_count() == 0 {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers = toaster.shown().map(|entry| layer(entry, now));
    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One stack layer: the card pinned at its animated bottom-left offset.
fn layer(entry: &ShownEntry, now: Instant) -> Element<'_, Message> {
    let x = entrance_x(entry.card().entrance_progress(now));

    let card = Container::new(entry.card().view(now, entry.close_button()))
        .width(Length::Fixed(revealed_width(x)))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .align_x(alignment::Horizontal::Right)
        .clip(true);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            left: x.max(0.0),
            bottom: entry.bottom_offset(now),
            ..Padding::ZERO
        })
        .into()
}

/// Horizontal position of the card's left edge during the entrance slide,
/// relative to the left window edge. Linear, from fully off screen to the
/// base gap.
fn entrance_x(progress: f32) -> f32 {
    let start = animation::ENTRANCE_OFFSCREEN_X;
    start + (spacing::BASE_GAP - start) * progress
}

/// Width of the card's on-screen portion for a left edge at `x`.
fn revealed_width(x: f32) -> f32 {
    (sizing::CARD_WIDTH + x.min(0.0)).max(0.0)
}
