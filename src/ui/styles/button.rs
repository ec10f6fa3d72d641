// SPDX-License-Identifier: MPL-2.0
//! Button styles built from composed [`Style`] fragments.

use super::Style;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::button;
use iced::{Background, Color, Theme};

/// Flat button drawn from a composed fragment.
///
/// Unset background stays transparent; hovering darkens whatever background
/// is configured so rows and transport buttons share the same feedback.
pub fn from_style(style: Style) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = style.background.unwrap_or(Color::TRANSPARENT);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: base.a.max(0.15),
                ..mix(base, palette::GRAY_800)
            },
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: style.text_color.unwrap_or(palette::WHITE),
            border: style.border(),
            ..Default::default()
        }
    }
}

/// Translucent black button for controls drawn on top of the video.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            ..Default::default()
        }
    }
}

/// Icon-only button: no chrome, slight backdrop on hover.
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_LIGHT,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        ..Default::default()
    }
}

fn mix(a: Color, b: Color) -> Color {
    Color::from_rgb(
        (a.r + b.r) / 2.0,
        (a.g + b.g) / 2.0,
        (a.b + b.b) / 2.0,
    )
}
