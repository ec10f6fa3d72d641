// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it, so the
//! arithmetic can be tested without a renderer.

pub mod drag;
pub mod mini_window;
pub mod snap;

pub use drag::DragState;
pub use mini_window::MiniWindow;
pub use snap::SnapAnimation;
