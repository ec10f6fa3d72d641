// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::media::VideoItem;
use crate::ui::video_player;
use iced::Task;

/// Direction for playlist navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::VideoSelected(item) => self.select(item),
            Message::Player(player_message) => self.handle_player_message(player_message),
            Message::PlayerNext => self.step(Step::Forward),
            Message::PlayerBack => self.step(Step::Backward),
            Message::PlayerClosed => {
                tracing::debug!(id = ?self.selected_id, "player closed");
                self.player = None;
                self.selected_id = None;
                Task::none()
            }
            Message::FullscreenChanged(fullscreen) => {
                tracing::info!(fullscreen, "player fullscreen changed");
                self.fullscreen = fullscreen;
                Task::none()
            }
            Message::WindowOpened(id, size) | Message::WindowResized(id, size) => {
                self.orientation.attach(id);
                self.window_size = size;
                self.handle_player_message(video_player::Message::ViewportResized(size))
            }
            Message::CursorMoved(position) => {
                self.handle_player_message(video_player::Message::CursorMoved(position))
            }
            Message::ButtonReleased => {
                if self.player.as_ref().is_some_and(video_player::State::is_dragging) {
                    self.handle_player_message(video_player::Message::DragEnded)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Forwards a message to the player and replays the callbacks it
    /// returns through `update`, in order.
    fn handle_player_message(&mut self, message: video_player::Message) -> Task<Message> {
        let Some(player) = self.player.as_mut() else {
            tracing::trace!(?message, "no player, dropping message");
            return Task::none();
        };

        let (callbacks, task) = player.handle_message(message);
        let mut tasks = vec![task.map(Message::Player)];
        for callback in callbacks {
            tasks.push(self.update(callback));
        }
        Task::batch(tasks)
    }

    fn step(&mut self, step: Step) -> Task<Message> {
        match self.neighbour(step).cloned() {
            Some(item) => self.select(item),
            None => Task::none(),
        }
    }

    /// Entry next to the selection, wrapping at both ends. Without a
    /// selection this is the first entry.
    fn neighbour(&self, step: Step) -> Option<&VideoItem> {
        let len = self.videos.len();
        if len == 0 {
            return None;
        }

        let index = match (self.selected_index(), step) {
            (None, _) => 0,
            (Some(current), Step::Forward) => (current + 1) % len,
            (Some(current), Step::Backward) => (current + len - 1) % len,
        };
        self.videos.get(index)
    }
}
