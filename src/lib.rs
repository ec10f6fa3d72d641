// SPDX-License-Identifier: MPL-2.0
//! `iced_clips` is a playlist and video player built with the Iced GUI framework.
//!
//! The two reusable pieces are [`ui::video_list`], a selectable list of
//! videos, and [`ui::video_player`], a player with normal, fullscreen and
//! draggable mini modes. Both accept per-slot style and icon overrides.
//! The [`app`] module wires them into a two-pane desktop application.

#![doc(html_root_url = "https://docs.rs/iced_clips/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod platform;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
