// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the toaster's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Card chrome and severity accent colors
- **Spacing**: Paddings and stacking geometry
- **Sizing**: Card and icon dimensions
- **Typography**: Font sizes
- **Radius**: Border radii
- **Animation**: Motion durations and distances

## Examples

```
use iced_toaster::ui::design_tokens::{palette, spacing};

// Bottom offset of the card in stacking position 3
let offset = spacing::BASE_GAP + spacing::SLOT_HEIGHT * 2.0;
assert_eq!(offset, 168.0);
let _ = palette::SURFACE;
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on card layout and stacking
2. Keep `SLOT_HEIGHT` larger than `CARD_HEIGHT`
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Card chrome
    pub const SURFACE: Color = Color::from_rgb8(0x33, 0x33, 0x33);
    pub const TEXT: Color = Color::WHITE;

    // Severity accents
    pub const ERROR: Color = Color::from_rgb8(0xFF, 0x46, 0x3A);
    pub const WARNING: Color = Color::from_rgb8(0xFF, 0xC7, 0x00);
    pub const SUCCESS: Color = Color::from_rgb8(0x00, 0xE5, 0x49);
    pub const INFORMATION: Color = Color::from_rgb8(0x29, 0xB2, 0xFF);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Inner padding of the toast card.
    pub const CARD_PADDING: f32 = 8.0;

    /// Gap between the severity icon and the message text.
    pub const ICON_GAP: f32 = 8.0;

    /// Padding around the close button's icon, enlarging its click target.
    pub const CLOSE_PADDING: f32 = 2.0;

    /// Distance between the window edge and the card in stacking position 1,
    /// both horizontally and vertically.
    pub const BASE_GAP: f32 = 8.0;

    /// Vertical stride between consecutive stacking positions. The bottom
    /// offset of position `p` is `BASE_GAP + SLOT_HEIGHT * (p - 1)`.
    pub const SLOT_HEIGHT: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const CARD_WIDTH: f32 = 400.0;
    pub const CARD_HEIGHT: f32 = 56.0;

    /// Width of the severity accent bar on the left edge of the card.
    pub const ACCENT_BAR_WIDTH: f32 = 4.8;

    // Icon sizes
    pub const SEVERITY_ICON: f32 = 32.0;
    pub const CLOSE_ICON: f32 = 19.2;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast message text.
    pub const MESSAGE: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const CARD: f32 = 9.6;
}

// ============================================================================
// Animation
// ============================================================================

pub mod animation {
    /// Duration of the entrance slide-and-fade (milliseconds).
    pub const ENTRANCE_MS: u64 = 250;

    /// Duration of the eased bottom-offset transition when shown cards
    /// change stacking position (milliseconds).
    pub const RESTACK_MS: u64 = 50;

    /// Horizontal start of the entrance slide. Off the left window edge by
    /// a full card width plus the base gap, so no pixel of the card shows
    /// on the first animation frame.
    pub const ENTRANCE_OFFSCREEN_X: f32 =
        -(super::sizing::CARD_WIDTH + super::spacing::BASE_GAP);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Stacking validation
    assert!(spacing::SLOT_HEIGHT > sizing::CARD_HEIGHT);
    assert!(spacing::BASE_GAP > 0.0);

    // Card layout validation
    assert!(sizing::ACCENT_BAR_WIDTH < sizing::CARD_WIDTH);
    assert!(sizing::SEVERITY_ICON < sizing::CARD_HEIGHT);
    assert!(sizing::CLOSE_ICON < sizing::SEVERITY_ICON);
    assert!(radius::CARD > 0.0);

    // Animation validation
    assert!(animation::ENTRANCE_MS > animation::RESTACK_MS);
    assert!(animation::ENTRANCE_OFFSCREEN_X < -sizing::CARD_WIDTH);

    // Color validation
    assert!(palette::SURFACE.r >= 0.0 && palette::SURFACE.r <= 1.0);
};
