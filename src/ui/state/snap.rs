// SPDX-License-Identifier: MPL-2.0
//! Short ease-out animation between two points.

use iced::Point;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    from: Point,
    to: Point,
    started: Instant,
    duration: Duration,
}

impl SnapAnimation {
    #[must_use]
    pub fn new(from: Point, to: Point, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.to
    }

    /// Progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated position at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Point {
        let t = ease_out_cubic(self.progress(now));
        Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
