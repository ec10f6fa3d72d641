// SPDX-License-Identifier: MPL-2.0
//! Geometry of the floating mini player.
//!
//! The window keeps its own position in viewport coordinates. Dragging moves
//! it freely; releasing clamps it back inside the viewport with a short snap
//! animation.

use super::{DragState, SnapAnimation};
use iced::{Point, Size};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct MiniWindow {
    position: Point,
    size: Size,
    drag: DragState,
    snap: Option<SnapAnimation>,
    snap_duration: Duration,
}

impl MiniWindow {
    /// Bottom-right corner of `viewport`, `margin` away from both edges.
    #[must_use]
    pub fn new(viewport: Size, size: Size, margin: f32, snap_duration: Duration) -> Self {
        let mut window = Self {
            position: Point::new(
                viewport.width - size.width - margin,
                viewport.height - size.height - margin,
            ),
            size,
            drag: DragState::default(),
            snap: None,
            snap_duration,
        };
        window.position = window.clamped(window.position, viewport);
        window
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    pub fn begin_drag(&mut self, cursor: Point) {
        self.snap = None;
        self.drag.start(cursor, self.position);
    }

    pub fn drag_to(&mut self, cursor: Point) {
        if let Some(position) = self.drag.calculate_position(cursor) {
            self.position = position;
        }
    }

    /// Ends a drag and starts snapping back inside `viewport` if needed.
    pub fn end_drag(&mut self, viewport: Size, now: Instant) {
        if !self.drag.is_dragging {
            return;
        }
        self.drag.stop();

        let target = self.clamped(self.position, viewport);
        if target != self.position {
            self.snap = Some(SnapAnimation::new(
                self.position,
                target,
                now,
                self.snap_duration,
            ));
        }
    }

    /// Advances the snap animation. Returns true while it keeps running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(snap) = self.snap else {
            return false;
        };

        self.position = snap.sample(now);
        if snap.is_finished(now) {
            self.position = snap.target();
            self.snap = None;
            return false;
        }
        true
    }

    /// Re-clamps the window after the viewport changed size.
    pub fn fit(&mut self, viewport: Size) {
        if self.drag.is_dragging {
            return;
        }
        if let Some(snap) = self.snap.take() {
            self.position = snap.target();
        }
        self.position = self.clamped(self.position, viewport);
    }

    /// Clamps into `[0, vw - w] x [0, vh - h]`, pinning to 0 when the window
    /// is larger than the viewport.
    #[must_use]
    pub fn clamped(&self, position: Point, viewport: Size) -> Point {
        let max_x = (viewport.width - self.size.width).max(0.0);
        let max_y = (viewport.height - self.size.height).max(0.0);
        Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const MINI: Size = Size::new(250.0, 150.0);
    const SNAP: Duration = Duration::from_millis(250);

    fn window() -> MiniWindow {
        MiniWindow::new(VIEWPORT, MINI, 10.0, SNAP)
    }

    #[test]
    fn starts_in_bottom_right_corner() {
        assert_eq!(window().position(), Point::new(540.0, 440.0));
    }

    #[test]
    fn drag_moves_by_cursor_delta() {
        let mut w = window();
        w.begin_drag(Point::new(600.0, 500.0));
        w.drag_to(Point::new(500.0, 450.0));

        assert!(w.is_dragging());
        assert_eq!(w.position(), Point::new(440.0, 390.0));
    }

    #[test]
    fn release_inside_bounds_does_not_animate() {
        let mut w = window();
        let now = Instant::now();
        w.begin_drag(Point::new(600.0, 500.0));
        w.drag_to(Point::new(500.0, 450.0));
        w.end_drag(VIEWPORT, now);

        assert!(!w.is_dragging());
        assert!(!w.is_animating());
        assert_eq!(w.position(), Point::new(440.0, 390.0));
    }

    #[test]
    fn release_outside_bounds_snaps_to_clamped_point() {
        let mut w = window();
        let now = Instant::now();
        w.begin_drag(Point::new(600.0, 500.0));
        w.drag_to(Point::new(1000.0, -200.0));
        assert_eq!(w.position(), Point::new(940.0, -260.0));

        w.end_drag(VIEWPORT, now);
        assert!(w.is_animating());

        assert!(w.tick(now + Duration::from_millis(100)));
        assert!(!w.tick(now + SNAP));
        assert_eq!(w.position(), Point::new(550.0, 0.0));
        assert!(!w.is_animating());
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut w = window();
        w.drag_to(Point::new(0.0, 0.0));
        assert_eq!(w.position(), Point::new(540.0, 440.0));
    }

    #[test]
    fn fit_reclamps_after_viewport_shrinks() {
        let mut w = window();
        w.fit(Size::new(400.0, 300.0));
        assert_eq!(w.position(), Point::new(150.0, 150.0));
    }

    #[test]
    fn oversized_window_pins_to_origin() {
        let w = window();
        assert_eq!(
            w.clamped(Point::new(30.0, 30.0), Size::new(100.0, 100.0)),
            Point::ORIGIN
        );
    }

    #[test]
    fn begin_drag_cancels_running_snap() {
        let mut w = window();
        let now = Instant::now();
        w.begin_drag(Point::new(0.0, 0.0));
        w.drag_to(Point::new(-500.0, 0.0));
        w.end_drag(VIEWPORT, now);
        assert!(w.is_animating());

        w.begin_drag(Point::new(10.0, 10.0));
        assert!(!w.is_animating());
    }
}
