// SPDX-License-Identifier: MPL-2.0
//! Toast card widget.
//!
//! A card is the visual representation of one shown toast: a dark rounded
//! rectangle with a severity-colored accent bar, the severity icon, the
//! message text and an optional close button. Cards are independent values
//! produced by the stamp; re-stamping never touches cards that are already
//! on screen.

use crate::toaster::{Message, Severity, ToastId};
use crate::ui::design_tokens::{animation, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::image::{Handle as ImageHandle, Image};
use iced::widget::{button, container, text, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Where a card's icon artwork comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// The embedded vector artwork, tinted at render time.
    BuiltIn,
    /// A host-supplied image file.
    Custom(PathBuf),
}

impl IconSource {
    /// Resolves a configured override into an icon source. Overrides are
    /// optional; absence selects the built-in artwork.
    pub fn from_override(source: Option<&str>) -> Self {
        match source {
            Some(path) => Self::Custom(PathBuf::from(path)),
            None => Self::BuiltIn,
        }
    }
}

/// The close button of a stamped card.
///
/// Produced by the stamp alongside the card so the dismissal wiring stays
/// explicit: whoever holds the button decides where its press lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseButton {
    target: ToastId,
    icon: IconSource,
}

impl CloseButton {
    pub(crate) fn new(target: ToastId, icon: IconSource) -> Self {
        Self { target, icon }
    }

    /// The toast this button dismisses.
    #[must_use]
    pub fn target(&self) -> ToastId {
        self.target
    }

    /// Renders the button, wired to dismiss its target.
    pub fn view(&self, opacity: f32) -> Element<'_, Message> {
        let icon: Element<'_, Message> = match &self.icon {
            IconSource::BuiltIn => icons::sized(
                icons::tinted(icons::cross(), faded(palette::TEXT, opacity)),
                sizing::CLOSE_ICON,
            )
            .into(),
            IconSource::Custom(path) => Image::new(ImageHandle::from_path(path))
                .width(Length::Fixed(sizing::CLOSE_ICON))
                .height(Length::Fixed(sizing::CLOSE_ICON))
                .into(),
        };

        button(icon)
            .on_press(Message::Close(self.target))
            .padding(spacing::CLOSE_PADDING)
            .style(close_button_style)
            .into()
    }
}

/// An independent, fully resolved toast card.
#[derive(Debug, Clone)]
pub struct ToastCard {
    id: ToastId,
    severity: Severity,
    message: String,
    accent: Color,
    icon: IconSource,
    stamped_at: Instant,
}

impl ToastCard {
    pub(crate) fn new(
        id: ToastId,
        severity: Severity,
        message: String,
        accent: Color,
        icon: IconSource,
        stamped_at: Instant,
    ) -> Self {
        Self {
            id,
            severity,
            message,
            accent,
            icon,
            stamped_at,
        }
    }

    /// Returns the card's toast ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the card's severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the resolved accent color.
    #[must_use]
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Returns the resolved icon source.
    #[must_use]
    pub fn icon(&self) -> &IconSource {
        &self.icon
    }

    /// Returns when this card was stamped.
    #[must_use]
    pub fn stamped_at(&self) -> Instant {
        self.stamped_at
    }

    /// Progress of the entrance animation at `now`, from 0.0 (just stamped)
    /// to 1.0 (fully settled). Linear, like the original slide-and-fade.
    #[must_use]
    pub fn entrance_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.stamped_at);
        let duration = animation::ENTRANCE_MS as f32;
        (elapsed.as_secs_f32() * 1000.0 / duration).clamp(0.0, 1.0)
    }

    /// Whether the entrance animation is still running at `now`.
    #[must_use]
    pub fn is_entering(&self, now: Instant) -> bool {
        self.entrance_progress(now) < 1.0
    }

    /// Renders the card.
    ///
    /// `now` drives the entrance fade; `close` is composed into the card's
    /// right edge when present.
    pub fn view<'a>(
        &'a self,
        now: Instant,
        close: Option<&'a CloseButton>,
    ) -> Element<'a, Message> {
        let opacity = self.entrance_progress(now);
        let accent = faded(self.accent, opacity);

        let accent_bar = Container::new(
            Space::new()
                .width(Length::Fixed(sizing::ACCENT_BAR_WIDTH))
                .height(Length::Fill),
        )
        .style(move |_theme: &Theme| accent_bar_style(accent));

        let icon_widget: Element<'a, Message> = match &self.icon {
            IconSource::BuiltIn => icons::sized(
                icons::tinted(icons::for_severity(self.severity), accent),
                sizing::SEVERITY_ICON,
            )
            .into(),
            IconSource::Custom(path) => Image::new(ImageHandle::from_path(path))
                .width(Length::Fixed(sizing::SEVERITY_ICON))
                .height(Length::Fixed(sizing::SEVERITY_ICON))
                .into(),
        };

        let message_widget = Text::new(self.message.as_str())
            .size(typography::MESSAGE)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::TEXT, opacity)),
            });

        // Layout: [icon] [message] [close]
        let mut content = Row::new()
            .spacing(spacing::ICON_GAP)
            .align_y(alignment::Vertical::Center)
            .push(icon_widget)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );
        if let Some(close) = close {
            content = content.push(close.view(opacity));
        }

        // Card frame: accent bar flush to the left edge, padded content
        let body = Row::new().push(accent_bar).push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::CARD_PADDING)
                .align_y(alignment::Vertical::Center),
        );

        Container::new(body)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .clip(true)
            .style(move |_theme: &Theme| card_frame_style(opacity))
            .into()
    }
}

/// Multiplies a color's alpha channel, for the entrance fade.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the card frame.
fn card_frame_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(palette::SURFACE, opacity))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::CARD.into(),
        },
        text_color: Some(faded(palette::TEXT, opacity)),
        ..Default::default()
    }
}

/// Style function for the accent bar. Only the outer corners are rounded so
/// the bar hugs the card's left edge.
fn accent_bar_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius {
                top_left: radius::CARD,
                top_right: 0.0,
                bottom_right: 0.0,
                bottom_left: radius::CARD,
            },
        },
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::TEXT,
            border: iced::Border::default(),
            shadow: iced::Shadow::default(),
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.2,
                ..palette::TEXT
            })),
            text_color: palette::TEXT,
            border: iced::Border {
                radius: radius::CARD.into(),
                ..Default::default()
            },
            shadow: iced::Shadow::default(),
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.35,
                ..palette::TEXT
            })),
            text_color: palette::TEXT,
            border: iced::Border {
                radius: radius::CARD.into(),
                ..Default::default()
            },
            shadow: iced::Shadow::default(),
            snap: true,
        },
    }
}
