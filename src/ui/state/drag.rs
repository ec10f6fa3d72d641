// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for moving the mini player.

use iced::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor position where the drag started
    pub start_position: Option<Point>,

    /// Window position when the drag started
    pub start_offset: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, cursor: Point, window_position: Point) {
        self.is_dragging = true;
        self.start_position = Some(cursor);
        self.start_offset = Some(window_position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Window position following the cursor delta since the drag started.
    ///
    /// Unclamped: the window may leave the viewport while dragging and is
    /// brought back on release.
    #[must_use]
    pub fn calculate_position(&self, cursor: Point) -> Option<Point> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(Point::new(
            start_offset.x + (cursor.x - start_pos.x),
            start_offset.y + (cursor.y - start_pos.y),
        ))
    }
}
