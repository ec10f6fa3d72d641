// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::VideoItem;
use crate::ui::video_player;
use iced::{window, Point, Size};

/// Top-level messages consumed by `App::update`. Player messages are
/// forwarded; the `Player*` and `FullscreenChanged` variants are the
/// callbacks the player hands back.
#[derive(Debug, Clone)]
pub enum Message {
    /// A row of the list was pressed.
    VideoSelected(VideoItem),
    Player(video_player::Message),
    PlayerNext,
    PlayerBack,
    PlayerClosed,
    FullscreenChanged(bool),
    WindowOpened(window::Id, Size),
    WindowResized(window::Id, Size),
    CursorMoved(Point),
    /// Left mouse button released anywhere in the window.
    ButtonReleased,
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override from the command line (`--lang`).
    pub lang: Option<String>,
    /// Playlist resolved from the command line.
    pub videos: Vec<VideoItem>,
}
