// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry and raw pointer events are routed to `App::update`, which
//! forwards them to the player. Only the pointer events the mini window drag
//! needs are kept.

use super::Message;
use iced::{event, mouse, window, Event, Subscription};

/// Native window and pointer events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowOpened(window_id, size))
        }
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(window_id, size))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::ButtonReleased)
        }
        _ => None,
    })
}
