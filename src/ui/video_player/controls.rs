// SPDX-License-Identifier: MPL-2.0
//! Transport bar: scrub slider, time display and control buttons.

use super::{format_time, styles as player_styles, Message, State, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Control, ControlState, IconOverrides};
use crate::ui::styles::{self, Style, StyleSlot};
use iced::widget::{button, column, container, row, slider, text, tooltip, Space, Text};
use iced::{Alignment, Element, Length, Theme};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

impl<H> State<H> {
    pub(super) fn transport<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let overrides = &self.props.styles;
        let fullscreen = self.is_fullscreen();
        let controls_style = player_styles::resolve(overrides, StyleSlot::Controls);
        let button_style = player_styles::resolve(overrides, StyleSlot::Button);
        let slider_style = player_styles::resolve(overrides, StyleSlot::Slider);
        let time_style = if fullscreen {
            player_styles::resolve(overrides, StyleSlot::TimeTextFullscreen)
        } else {
            player_styles::resolve(overrides, StyleSlot::TimeText)
        };

        let timeline = slider(
            0.0..=self.duration().max(0.0),
            self.displayed_time(),
            Message::SeekPreview,
        )
        .on_release(Message::SeekCommit)
        .step(SLIDER_STEP_SECS)
        .width(Length::Fill)
        .height(if fullscreen {
            sizing::SLIDER_HEIGHT_FULLSCREEN
        } else {
            sizing::SLIDER_HEIGHT
        })
        .style(styles::slider::scrubber(slider_style));

        let time_display = text(format!(
            "{} / {}",
            format_time(self.displayed_time()),
            format_time(self.duration())
        ))
        .size(time_style.font_size.unwrap_or(typography::CAPTION))
        .style(move |_theme: &Theme| time_style.text());

        let state = self.control_state();
        let icons = &self.props.icons;
        let tr = |key: &str| ctx.i18n.tr(key);

        let mute_tooltip = if state.muted {
            tr("player-unmute-tooltip")
        } else {
            tr("player-mute-tooltip")
        };
        let play_tooltip = if state.paused {
            tr("player-play-tooltip")
        } else {
            tr("player-pause-tooltip")
        };
        let fullscreen_tooltip = if fullscreen {
            tr("player-exit-fullscreen-tooltip")
        } else {
            tr("player-fullscreen-tooltip")
        };

        let rate_button = button(
            text(self.rate().label())
                .size(button_style.font_size.unwrap_or(typography::TITLE))
                .style(move |_theme: &Theme| button_style.text()),
        )
        .on_press(Message::CycleRate)
        .padding(button_style.padding())
        .style(styles::button::from_style(button_style));

        let buttons = row![
            control_button(Control::Mute, &state, icons, button_style, Message::ToggleMute, mute_tooltip),
            control_button(Control::Back, &state, icons, button_style, Message::Back, tr("player-back-tooltip")),
            control_button(Control::PlayPause, &state, icons, button_style, Message::TogglePlayback, play_tooltip),
            control_button(Control::Next, &state, icons, button_style, Message::Next, tr("player-next-tooltip")),
            control_button(Control::Loop, &state, icons, button_style, Message::ToggleLoop, tr("player-loop-tooltip")),
            with_tooltip(rate_button.into(), tr("player-rate-tooltip")),
            control_button(Control::Fullscreen, &state, icons, button_style, Message::ToggleFullscreen, fullscreen_tooltip),
            control_button(Control::Minimize, &state, icons, button_style, Message::ToggleMinimize, tr("player-minimize-tooltip")),
        ]
        .spacing(controls_style.spacing.unwrap_or(spacing::XS))
        .align_y(Alignment::Center);

        let bottom_row = row![time_display, Space::new().width(Length::Fill), buttons]
            .spacing(spacing::SM)
            .align_y(Alignment::Center);

        container(column![timeline, bottom_row].spacing(spacing::XXS))
            .width(Length::Fill)
            .padding(controls_style.padding())
            .style(styles::container::from_style(controls_style))
            .into()
    }
}

/// Icon button resolved through the icon overrides.
pub(super) fn control_button<'a>(
    control: Control,
    state: &ControlState,
    overrides: &IconOverrides,
    style: Style,
    message: Message,
    tooltip_text: String,
) -> Element<'a, Message> {
    let asset = icons::resolve_asset(control, state, overrides);
    let size = style
        .width
        .or(style.height)
        .unwrap_or(sizing::ICON_CONTROL);

    let content = button(icons::view(&asset, size))
        .on_press(message)
        .padding(style.padding())
        .style(styles::button::from_style(style));

    with_tooltip(content.into(), tooltip_text)
}

pub(super) fn with_tooltip<'a>(
    content: Element<'a, Message>,
    tooltip_text: String,
) -> Element<'a, Message> {
    tooltip(content, Text::new(tooltip_text), tooltip::Position::Top)
        .gap(4)
        .style(container::rounded_box)
        .into()
}
