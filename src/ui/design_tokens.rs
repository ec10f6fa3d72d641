// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the list and the player.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_clips::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_LIGHT,
    ..palette::BLACK
};

let padding = spacing::SM;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb8(0x22, 0x22, 0x22);
    pub const GRAY_800: Color = Color::from_rgb8(0x44, 0x44, 0x44);
    pub const GRAY_400: Color = Color::from_rgb8(0xaa, 0xaa, 0xaa);
    pub const GRAY_300: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);
    pub const GRAY_200: Color = Color::from_rgb8(0xdd, 0xdd, 0xdd);

    // Accent (cyan scale)
    pub const ACCENT_500: Color = Color::from_rgb8(0x00, 0xac, 0xed);
    pub const ACCENT_300: Color = Color::from_rgb8(0x66, 0xcc, 0xff);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_LIGHT: f32 = 0.4;
    pub const OVERLAY_MEDIUM: f32 = 0.6;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 30.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Transport control icon (width of a 30x25 glyph box).
    pub const ICON_CONTROL: f32 = 26.0;
    /// Play/pause and close icons inside the mini player.
    pub const ICON_MINI: f32 = 30.0;
    /// Restore icon inside the mini player.
    pub const ICON_MINI_RESTORE: f32 = 25.0;

    /// Height of the mini player's top control strip.
    pub const MINI_CONTROLS_HEIGHT: f32 = 40.0;

    /// Height of a list row's preview surface.
    pub const PREVIEW_HEIGHT: f32 = 100.0;
    /// Share of the row width given to the preview surface.
    pub const PREVIEW_WIDTH_RATIO: f32 = 0.35;

    /// Width of the playlist pane next to the player.
    pub const LIST_PANE_WIDTH: f32 = 360.0;

    pub const SLIDER_HEIGHT: f32 = 20.0;
    pub const SLIDER_HEIGHT_FULLSCREEN: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_LIGHT < opacity::OVERLAY_MEDIUM);

    assert!(sizing::PREVIEW_WIDTH_RATIO > 0.0 && sizing::PREVIEW_WIDTH_RATIO < 1.0);
    assert!(sizing::SLIDER_HEIGHT_FULLSCREEN > sizing::SLIDER_HEIGHT);
};
