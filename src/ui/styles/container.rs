// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::Style;
use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Container surface drawn from a composed fragment.
pub fn from_style(style: Style) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: style.background(),
        text_color: style.text_color,
        border: style.border(),
        ..Default::default()
    }
}

/// Black scrim behind controls laid over the video.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Application background, derived from the active theme.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
