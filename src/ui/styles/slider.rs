// SPDX-License-Identifier: MPL-2.0
//! Scrub bar style.

use super::Style;
use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

const RAIL_WIDTH: f32 = 4.0;
const HANDLE_RADIUS: f32 = 7.0;

/// Played part uses `accent`, remaining part uses `background`.
pub fn scrubber(style: Style) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let played = style.accent.unwrap_or(palette::ACCENT_500);
        let remaining = style.background.unwrap_or(palette::GRAY_300);
        let radius = match status {
            slider::Status::Hovered | slider::Status::Dragged => HANDLE_RADIUS + 1.0,
            slider::Status::Active => HANDLE_RADIUS,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(played), Background::Color(remaining)),
                width: RAIL_WIDTH,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: (RAIL_WIDTH / 2.0).into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius },
                background: Background::Color(played),
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrubber_defaults_to_accent_and_light_gray() {
        let resolved = scrubber(Style::EMPTY)(&Theme::Dark, slider::Status::Active);
        assert_eq!(
            resolved.rail.backgrounds.0,
            Background::Color(palette::ACCENT_500)
        );
        assert_eq!(
            resolved.rail.backgrounds.1,
            Background::Color(palette::GRAY_300)
        );
    }

    #[test]
    fn scrubber_handle_grows_while_dragged() {
        let style = scrubber(Style::EMPTY);
        let idle = style(&Theme::Dark, slider::Status::Active);
        let dragged = style(&Theme::Dark, slider::Status::Dragged);
        match (idle.handle.shape, dragged.handle.shape) {
            (
                slider::HandleShape::Circle { radius: a },
                slider::HandleShape::Circle { radius: b },
            ) => assert!(b > a),
            _ => panic!("expected circular handles"),
        }
    }
}
