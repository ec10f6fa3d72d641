// SPDX-License-Identifier: MPL-2.0
//! Built-in look of the player regions.

use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles::{Style, StyleOverrides, StyleSlot};
use iced::Color;

const VIDEO: Style = Style {
    background: Some(palette::BLACK),
    ..Style::EMPTY
};

const CONTAINER: Style = Style {
    spacing: Some(spacing::MD),
    ..Style::EMPTY
};

const CONTROLS: Style = Style {
    padding: Some(spacing::MD),
    spacing: Some(spacing::XS),
    text_color: Some(palette::WHITE),
    ..Style::EMPTY
};

const BUTTON: Style = Style {
    padding: Some(spacing::XXS),
    text_color: Some(palette::ACCENT_500),
    border_radius: Some(4.0),
    ..Style::EMPTY
};

const SLIDER: Style = Style {
    accent: Some(palette::ACCENT_500),
    background: Some(palette::GRAY_300),
    ..Style::EMPTY
};

const TIME_TEXT: Style = Style {
    text_color: Some(palette::GRAY_300),
    font_size: Some(typography::CAPTION),
    ..Style::EMPTY
};

const TIME_TEXT_FULLSCREEN: Style = Style {
    text_color: Some(palette::WHITE),
    font_size: Some(typography::BODY_LG),
    ..Style::EMPTY
};

const TITLE: Style = Style {
    text_color: Some(palette::WHITE),
    font_size: Some(typography::TITLE),
    ..Style::EMPTY
};

const DESCRIPTION: Style = Style {
    text_color: Some(palette::GRAY_200),
    font_size: Some(typography::BODY),
    ..Style::EMPTY
};

const TAG_CONTAINER: Style = Style {
    spacing: Some(spacing::XS),
    ..Style::EMPTY
};

const TAG: Style = Style {
    text_color: Some(palette::ACCENT_500),
    font_size: Some(typography::BODY_SM),
    ..Style::EMPTY
};

/// Scrim behind the fullscreen transport overlay.
pub const FULLSCREEN_SCRIM: Color = Color {
    a: opacity::OVERLAY_LIGHT,
    ..palette::BLACK
};

/// Base fragment for a slot; slots the player doesn't draw are empty.
#[must_use]
pub fn base_style(slot: StyleSlot) -> Style {
    match slot {
        StyleSlot::Container => CONTAINER,
        StyleSlot::Video => VIDEO,
        StyleSlot::Controls => CONTROLS,
        StyleSlot::Button => BUTTON,
        StyleSlot::Slider => SLIDER,
        StyleSlot::TimeText => TIME_TEXT,
        StyleSlot::TimeTextFullscreen => TIME_TEXT_FULLSCREEN,
        StyleSlot::Title => TITLE,
        StyleSlot::Description => DESCRIPTION,
        StyleSlot::TagContainer => TAG_CONTAINER,
        StyleSlot::Tag => TAG,
        StyleSlot::Item
        | StyleSlot::SelectedItem
        | StyleSlot::VideoPreview
        | StyleSlot::SelectedText => Style::EMPTY,
    }
}

/// Base fragment followed by the caller's override.
#[must_use]
pub fn resolve(overrides: &StyleOverrides, slot: StyleSlot) -> Style {
    overrides.resolve(slot, &base_style(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_time_text_is_larger_than_normal() {
        let normal = base_style(StyleSlot::TimeText).font_size.unwrap();
        let fullscreen = base_style(StyleSlot::TimeTextFullscreen).font_size.unwrap();
        assert!(fullscreen > normal);
    }

    #[test]
    fn caller_override_wins_and_keeps_base_fields() {
        let overrides = StyleOverrides::new().with(
            StyleSlot::Tag,
            Style {
                text_color: Some(palette::WHITE),
                ..Style::EMPTY
            },
        );
        let tag = resolve(&overrides, StyleSlot::Tag);
        assert_eq!(tag.text_color, Some(palette::WHITE));
        assert_eq!(tag.font_size, Some(typography::BODY_SM));
    }

    #[test]
    fn list_only_slots_have_no_player_base() {
        assert!(base_style(StyleSlot::SelectedItem).is_empty());
    }
}
