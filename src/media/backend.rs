// SPDX-License-Identifier: MPL-2.0
//! Contract between the player and whatever actually plays media.

use super::VideoSource;
use iced::Task;
use std::fmt;
use std::time::Instant;

/// Notifications from the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available.
    Loaded { duration_secs: f64 },
    /// Periodic playback position.
    Progress { current_time: f64 },
    /// Playback reached the end of the media.
    Ended,
}

/// How the picture is fitted into its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    #[default]
    Contain,
    Cover,
}

/// Declarative playback properties pushed to the backend after every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackProps {
    pub paused: bool,
    pub muted: bool,
    pub rate: f32,
    pub repeat: bool,
    pub resize: ResizeMode,
}

impl Default for PlaybackProps {
    fn default() -> Self {
        Self {
            paused: false,
            muted: false,
            rate: 1.0,
            repeat: false,
            resize: ResizeMode::Contain,
        }
    }
}

/// A media playback engine.
///
/// `load` may finish asynchronously; the returned task yields the events
/// produced by loading (usually a single [`MediaEvent::Loaded`]). Everything
/// that happens during playback is reported by `tick`.
pub trait MediaBackend: fmt::Debug {
    fn load(&mut self, source: &VideoSource) -> Task<MediaEvent>;

    fn apply(&mut self, props: &PlaybackProps);

    fn seek(&mut self, secs: f64);

    fn tick(&mut self, now: Instant) -> Vec<MediaEvent>;
}

/// A backend with a source loaded into it.
///
/// Seeking is only possible through this handle, so there is nothing to seek
/// while no source is mounted.
#[derive(Debug)]
pub struct MediaElement {
    source: VideoSource,
    backend: Box<dyn MediaBackend>,
}

impl MediaElement {
    /// Loads `source` into `backend`.
    pub fn mount(
        mut backend: Box<dyn MediaBackend>,
        source: VideoSource,
        props: &PlaybackProps,
    ) -> (Self, Task<MediaEvent>) {
        tracing::debug!(uri = %source.uri, "mounting media element");
        backend.apply(props);
        let task = backend.load(&source);
        (Self { source, backend }, task)
    }

    /// Releases the backend for reuse.
    #[must_use]
    pub fn unmount(self) -> Box<dyn MediaBackend> {
        tracing::debug!(uri = %self.source.uri, "unmounting media element");
        self.backend
    }

    #[must_use]
    pub fn source(&self) -> &VideoSource {
        &self.source
    }

    pub fn apply(&mut self, props: &PlaybackProps) {
        self.backend.apply(props);
    }

    pub fn seek(&mut self, secs: f64) {
        self.backend.seek(secs);
    }

    pub fn tick(&mut self, now: Instant) -> Vec<MediaEvent> {
        self.backend.tick(now)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted backend for player tests.

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Load(String),
        Apply(PlaybackProps),
        Seek(f64),
    }

    /// Records calls and replays queued events on the next tick.
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedBackend {
        pub calls: Rc<RefCell<Vec<Call>>>,
        pub queued: Rc<RefCell<Vec<MediaEvent>>>,
    }

    impl ScriptedBackend {
        pub fn seeks(&self) -> Vec<f64> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Seek(secs) => Some(*secs),
                    _ => None,
                })
                .collect()
        }

        pub fn loads(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Load(uri) => Some(uri.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn last_props(&self) -> Option<PlaybackProps> {
            self.calls.borrow().iter().rev().find_map(|call| match call {
                Call::Apply(props) => Some(*props),
                _ => None,
            })
        }
    }

    impl MediaBackend for ScriptedBackend {
        fn load(&mut self, source: &VideoSource) -> Task<MediaEvent> {
            self.calls.borrow_mut().push(Call::Load(source.uri.clone()));
            Task::none()
        }

        fn apply(&mut self, props: &PlaybackProps) {
            self.calls.borrow_mut().push(Call::Apply(*props));
        }

        fn seek(&mut self, secs: f64) {
            self.calls.borrow_mut().push(Call::Seek(secs));
        }

        fn tick(&mut self, _now: Instant) -> Vec<MediaEvent> {
            self.queued.borrow_mut().drain(..).collect()
        }
    }
}
