// SPDX-License-Identifier: MPL-2.0
//! Layouts for the three display modes.

use super::controls::control_button;
use super::{styles as player_styles, DisplayMode, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons::{self, AssetRef, Control, IconSlot};
use crate::ui::styles::{self, Style, StyleSlot};
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{column, container, mouse_area, row, text, Column, Row, Space, Stack};
use iced::{Alignment, Element, Font, Length, Padding, Theme};

/// View context for rendering the player.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

const TITLE_FONT: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

impl<H> State<H> {
    /// Renders the player for its current display mode.
    ///
    /// In minimized mode the result is a full-size transparent layer with the
    /// mini window placed at its position, meant to be stacked over the host.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.display {
            DisplayMode::Normal => self.view_normal(&ctx),
            DisplayMode::Fullscreen => self.view_fullscreen(&ctx),
            DisplayMode::Minimized => self.view_minimized(&ctx),
        }
    }

    fn surface<'a>(&self, height: Length, icon_size: f32) -> Element<'a, Message> {
        let video_style = player_styles::resolve(&self.props.styles, StyleSlot::Video);
        let content: Element<'a, Message> = if self.is_paused() {
            icons::view(&AssetRef::Builtin(IconSlot::Play), icon_size)
        } else {
            Space::new().into()
        };

        container(content)
            .width(Length::Fill)
            .height(height)
            .center_x(Length::Fill)
            .center_y(height)
            .style(styles::container::from_style(video_style))
            .into()
    }

    fn view_normal<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let container_style = player_styles::resolve(&self.props.styles, StyleSlot::Container);

        let surface = self.surface(
            Length::Fixed(self.settings.video_height),
            sizing::ICON_MINI * 2.0,
        );

        column![surface, self.transport(ctx), self.metadata()]
            .spacing(container_style.spacing.unwrap_or(spacing::MD))
            .padding(container_style.padding())
            .width(Length::Fill)
            .into()
    }

    fn metadata<'a>(&'a self) -> Element<'a, Message> {
        let overrides = &self.props.styles;
        let title_style = player_styles::resolve(overrides, StyleSlot::Title);
        let description_style = player_styles::resolve(overrides, StyleSlot::Description);
        let tag_container_style = player_styles::resolve(overrides, StyleSlot::TagContainer);
        let tag_style = player_styles::resolve(overrides, StyleSlot::Tag);

        let mut block: Column<'a, Message> = column![text(&self.props.title)
            .size(title_style.font_size.unwrap_or(typography::TITLE))
            .font(TITLE_FONT)
            .style(move |_theme: &Theme| title_style.text())]
        .spacing(spacing::XS)
        .padding(Padding::new(spacing::MD).top(0.0));

        if let Some(description) = self
            .props
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
        {
            block = block.push(
                text(description)
                    .size(description_style.font_size.unwrap_or(typography::BODY))
                    .style(move |_theme: &Theme| description_style.text()),
            );
        }

        if !self.props.tags.is_empty() {
            let tags: Row<'a, Message> = Row::with_children(self.props.tags.iter().map(|tag| {
                text(format!("#{tag}"))
                    .size(tag_style.font_size.unwrap_or(typography::BODY_SM))
                    .style(move |_theme: &Theme| tag_style.text())
                    .into()
            }))
            .spacing(tag_container_style.spacing.unwrap_or(spacing::XS));

            block = block.push(
                container(tags)
                    .padding(tag_container_style.padding())
                    .style(styles::container::from_style(tag_container_style)),
            );
        }

        block.into()
    }

    fn view_fullscreen<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let surface = mouse_area(self.surface(Length::Fill, sizing::ICON_MINI * 3.0))
            .on_press(Message::SurfaceTapped);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(surface);

        if self.controls_visible() {
            let overlay = container(self.transport(ctx))
                .width(Length::Fill)
                .style(styles::container::scrim(player_styles::FULLSCREEN_SCRIM.a));

            layers = layers.push(
                container(overlay)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(Vertical::Bottom),
            );
        }

        layers.into()
    }

    fn view_minimized<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let size = self.settings.mini_size;
        let state = self.control_state();
        let icons = &self.props.icons;
        let button_style = Style {
            padding: Some(spacing::XXS),
            width: Some(sizing::ICON_MINI),
            ..Style::EMPTY
        };
        let restore_style = Style {
            width: Some(sizing::ICON_MINI_RESTORE),
            ..button_style
        };

        let play_tooltip = if state.paused {
            ctx.i18n.tr("player-play-tooltip")
        } else {
            ctx.i18n.tr("player-pause-tooltip")
        };

        let top_bar = container(
            row![
                control_button(Control::PlayPause, &state, icons, button_style, Message::TogglePlayback, play_tooltip),
                Space::new().width(Length::Fill),
                control_button(Control::Restore, &state, icons, restore_style, Message::Restore, ctx.i18n.tr("player-restore-tooltip")),
                control_button(Control::Close, &state, icons, button_style, Message::Close, ctx.i18n.tr("player-close-tooltip")),
            ]
            .spacing(spacing::XXS)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MINI_CONTROLS_HEIGHT))
        .padding([0.0, spacing::XXS])
        .center_y(Length::Fixed(sizing::MINI_CONTROLS_HEIGHT))
        .style(styles::container::scrim(opacity::OVERLAY_MEDIUM));

        let window = container(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(self.surface(Length::Fill, sizing::ICON_MINI))
                .push(top_bar),
        )
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .style(styles::container::from_style(Style {
            background: Some(palette::BLACK),
            border_color: Some(palette::GRAY_800),
            border_width: Some(1.0),
            border_radius: Some(radius::MD),
            ..Style::EMPTY
        }));

        let draggable = mouse_area(window)
            .on_press(Message::DragStarted)
            .on_release(Message::DragEnded);

        // Padding can't be negative: while dragged past the top/left edge the
        // window rests on the edge until it snaps back.
        let position = self.mini_position();
        container(draggable)
            .padding(Padding {
                top: position.y.max(0.0),
                left: position.x.max(0.0),
                right: 0.0,
                bottom: 0.0,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
