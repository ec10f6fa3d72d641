// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`video_list`] - Selectable list of videos
//! - [`video_player`] - Player with transport, fullscreen and mini window
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Interaction state (drag, snap animation, mini window)
//! - [`styles`] - Style fragments, override slots and widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Built-in and custom control icons

pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
pub mod theming;
pub mod video_list;
pub mod video_player;
