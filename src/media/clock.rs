// SPDX-License-Identifier: MPL-2.0
//! Timeline-only backend.
//!
//! Probes the source duration off the UI thread and advances a clock on each
//! tick. Nothing is decoded; this is enough to drive the player's transport
//! and end-of-media behavior.

use super::backend::{MediaBackend, MediaEvent, PlaybackProps};
use super::{probe, VideoSource};
use crate::error::MediaError;
use iced::Task;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Blocking duration probe, swappable for tests.
pub type ProbeFn = fn(&str) -> Result<f64, MediaError>;

pub struct ClockBackend {
    probe: ProbeFn,
    props: PlaybackProps,
    /// Written by the probe of the current load. A new load replaces the
    /// slot, so a late probe of an earlier source writes nowhere visible.
    duration: Arc<Mutex<Option<f64>>>,
    position: f64,
    ended: bool,
    last_tick: Option<Instant>,
}

impl fmt::Debug for ClockBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockBackend")
            .field("props", &self.props)
            .field("duration", &self.duration())
            .field("position", &self.position)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}

impl Default for ClockBackend {
    fn default() -> Self {
        Self::new(probe::probe_duration)
    }
}

impl ClockBackend {
    #[must_use]
    pub fn new(probe: ProbeFn) -> Self {
        Self {
            probe,
            props: PlaybackProps::default(),
            duration: Arc::new(Mutex::new(None)),
            position: 0.0,
            ended: false,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration.lock().ok().and_then(|guard| *guard)
    }
}

impl MediaBackend for ClockBackend {
    fn load(&mut self, source: &VideoSource) -> Task<MediaEvent> {
        let slot = Arc::new(Mutex::new(None));
        self.duration = Arc::clone(&slot);
        self.position = 0.0;
        self.ended = false;
        self.last_tick = None;

        let probe = self.probe;
        let uri = source.uri.clone();

        Task::future(async move {
            let probed_uri = uri.clone();
            match tokio::task::spawn_blocking(move || probe(&probed_uri)).await {
                Ok(Ok(duration_secs)) => {
                    if let Ok(mut guard) = slot.lock() {
                        *guard = Some(duration_secs);
                    }
                    Some(duration_secs)
                }
                Ok(Err(error)) => {
                    tracing::warn!(%uri, %error, "failed to probe media duration");
                    None
                }
                Err(error) => {
                    tracing::warn!(%uri, %error, "duration probe task failed");
                    None
                }
            }
        })
        .then(|duration: Option<f64>| match duration {
            Some(duration_secs) => Task::done(MediaEvent::Loaded { duration_secs }),
            None => Task::none(),
        })
    }

    fn apply(&mut self, props: &PlaybackProps) {
        self.props = *props;
    }

    fn seek(&mut self, secs: f64) {
        let upper = self.duration().unwrap_or(f64::INFINITY);
        self.position = if secs.is_nan() { 0.0 } else { secs.clamp(0.0, upper) };
        self.ended = false;
    }

    fn tick(&mut self, now: Instant) -> Vec<MediaEvent> {
        let elapsed = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_tick = Some(now);

        if self.props.paused || self.ended {
            return Vec::new();
        }
        let Some(duration) = self.duration() else {
            return Vec::new();
        };

        self.position += elapsed * f64::from(self.props.rate);
        if self.position < duration {
            return vec![MediaEvent::Progress {
                current_time: self.position,
            }];
        }

        if self.props.repeat {
            self.position = 0.0;
            vec![
                MediaEvent::Progress { current_time: 0.0 },
                MediaEvent::Ended,
            ]
        } else {
            self.position = duration;
            self.ended = true;
            vec![
                MediaEvent::Progress {
                    current_time: duration,
                },
                MediaEvent::Ended,
            ]
        }
    }
}
