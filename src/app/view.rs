// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Normal mode puts the list and the player side by side. A fullscreen
//! player takes the whole window; a minimized one floats over the list.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::media::VideoItem;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use crate::ui::video_list;
use crate::ui::video_player::{self, DisplayMode};
use iced::widget::{container, row, text, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub videos: &'a [VideoItem],
    pub selected_id: Option<&'a str>,
    pub player: Option<&'a video_player::State<Message>>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(player) = ctx.player else {
        return side_by_side(list_pane(&ctx), empty_player(ctx.i18n));
    };

    let player_view = player
        .view(video_player::ViewContext { i18n: ctx.i18n })
        .map(Message::Player);

    match player.display() {
        DisplayMode::Fullscreen => player_view,
        DisplayMode::Minimized => Stack::new()
            .push(list_pane(&ctx))
            .push(player_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        DisplayMode::Normal => side_by_side(list_pane(&ctx), player_view),
    }
}

fn list_pane<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    video_list::view(
        video_list::ViewContext {
            i18n: ctx.i18n,
            styles: &ctx.config.styles.list,
        },
        ctx.videos,
        ctx.selected_id,
        Message::VideoSelected,
    )
}

fn side_by_side<'a>(
    list: Element<'a, Message>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        container(list)
            .width(Length::Fixed(sizing::LIST_PANE_WIDTH))
            .height(Length::Fill),
        container(content).width(Length::Fill).height(Length::Fill),
    ]
    .into()
}

fn empty_player(i18n: &I18n) -> Element<'_, Message> {
    container(text(i18n.tr("player-empty")).size(typography::BODY_LG))
        .center(Length::Fill)
        .style(styles::container::page)
        .into()
}
