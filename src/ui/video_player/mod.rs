// SPDX-License-Identifier: MPL-2.0
//! Video player component.
//!
//! The player owns its UI state (pause, mute, loop, rate, position, display
//! mode, mini window geometry) and drives a [`MediaElement`] with it. It is
//! generic over the host's message type `H`: host callbacks are plain
//! messages handed back from [`State::handle_message`], and a callback that
//! was not supplied turns its control into a no-op.
//!
//! # Display modes
//!
//! - **Normal**: video at a fixed height, transport bar, metadata.
//! - **Fullscreen**: video fills the viewport, transport overlay toggled by tap.
//! - **Minimized**: small draggable window floating over the host.
//!
//! A single [`DisplayMode`] value makes fullscreen and minimized exclusive.

mod controls;
pub mod rate;
pub mod styles;
pub mod time;
mod view;

pub use rate::PlaybackRate;
pub use time::{clamp_position, format_time};
pub use view::ViewContext;

use crate::config::defaults;
use crate::media::{MediaBackend, MediaElement, MediaEvent, PlaybackProps, ResizeMode, VideoSource};
use crate::platform::OrientationLock;
use crate::ui::icons::{ControlState, IconOverrides};
use crate::ui::state::MiniWindow;
use crate::ui::styles::StyleOverrides;
use iced::{Point, Size, Subscription, Task};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Geometry and timing knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Delay between leaving fullscreen and showing the mini player.
    pub minimize_delay: Duration,
    /// Cadence of media ticks.
    pub progress_interval: Duration,
    pub mini_size: Size,
    /// Initial gap between the mini window and the viewport corner.
    pub mini_margin: f32,
    /// Video height in normal mode.
    pub video_height: f32,
    pub snap_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimize_delay: Duration::from_millis(defaults::DEFAULT_MINIMIZE_DELAY_MS),
            progress_interval: Duration::from_millis(defaults::DEFAULT_PROGRESS_INTERVAL_MS),
            mini_size: Size::new(defaults::DEFAULT_MINI_WIDTH, defaults::DEFAULT_MINI_HEIGHT),
            mini_margin: defaults::DEFAULT_MINI_MARGIN,
            video_height: defaults::DEFAULT_VIDEO_HEIGHT,
            snap_duration: Duration::from_millis(defaults::SNAP_ANIMATION_MS),
        }
    }
}

/// Host callbacks, expressed as host messages.
#[derive(Debug, Clone)]
pub struct Callbacks<H> {
    pub on_next: Option<H>,
    pub on_back: Option<H>,
    pub on_close: Option<H>,
    pub on_fullscreen_change: Option<fn(bool) -> H>,
}

impl<H> Default for Callbacks<H> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_back: None,
            on_close: None,
            on_fullscreen_change: None,
        }
    }
}

/// Everything the host passes in.
#[derive(Debug, Clone)]
pub struct PlayerProps<H> {
    pub source: VideoSource,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub callbacks: Callbacks<H>,
    pub styles: StyleOverrides,
    pub icons: IconOverrides,
}

impl<H> PlayerProps<H> {
    #[must_use]
    pub fn new(source: VideoSource, title: impl Into<String>) -> Self {
        Self {
            source,
            title: title.into(),
            description: None,
            tags: Vec::new(),
            callbacks: Callbacks::default(),
            styles: StyleOverrides::default(),
            icons: IconOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Fullscreen,
    Minimized,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    ToggleMute,
    ToggleLoop,
    CycleRate,
    ToggleFullscreen,
    ToggleMinimize,
    /// The delayed half of minimizing from fullscreen, tagged with the
    /// instance that scheduled it.
    MinimizeDelayElapsed(u64),
    Restore,
    Close,
    /// Slider is being dragged; visual only.
    SeekPreview(f64),
    /// Slider released; seek to the previewed position.
    SeekCommit,
    Seek(f64),
    /// Event from an asynchronous load, tagged with the source it belongs to.
    Media { uri: String, event: MediaEvent },
    DragStarted,
    CursorMoved(Point),
    DragEnded,
    SurfaceTapped,
    Next,
    Back,
    ViewportResized(Size),
    Tick(Instant),
}

#[derive(Debug)]
pub struct State<H> {
    instance: u64,
    props: PlayerProps<H>,
    settings: Settings,
    element: Option<MediaElement>,
    orientation: Box<dyn OrientationLock>,
    paused: bool,
    muted: bool,
    loop_enabled: bool,
    rate: PlaybackRate,
    duration: f64,
    current_time: f64,
    seek_preview: Option<f64>,
    display: DisplayMode,
    show_controls: bool,
    viewport: Size,
    mini: MiniWindow,
    cursor: Option<Point>,
}

impl<H: Clone> State<H> {
    /// Creates the player and starts loading `props.source` into `backend`.
    pub fn new(
        props: PlayerProps<H>,
        backend: Box<dyn MediaBackend>,
        orientation: Box<dyn OrientationLock>,
        settings: Settings,
        viewport: Size,
    ) -> (Self, Task<Message>) {
        let mini = MiniWindow::new(
            viewport,
            settings.mini_size,
            settings.mini_margin,
            settings.snap_duration,
        );
        let mut state = Self {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            props,
            settings,
            element: None,
            orientation,
            paused: false,
            muted: false,
            loop_enabled: false,
            rate: PlaybackRate::default(),
            duration: 0.0,
            current_time: 0.0,
            seek_preview: None,
            display: DisplayMode::Normal,
            show_controls: true,
            viewport,
            mini,
            cursor: None,
        };
        let task = state.mount(backend);
        (state, task)
    }

    /// Replaces the host props. A new source URI restarts playback from the
    /// beginning; mute, loop and rate carry over.
    pub fn set_props(&mut self, props: PlayerProps<H>) -> Task<Message> {
        let source_changed = props.source != self.props.source;
        self.props = props;

        if !source_changed {
            return Task::none();
        }

        tracing::debug!(uri = %self.props.source.uri, "player source changed");
        self.paused = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.seek_preview = None;

        match self.element.take() {
            Some(element) => self.mount(element.unmount()),
            None => Task::none(),
        }
    }

    fn mount(&mut self, backend: Box<dyn MediaBackend>) -> Task<Message> {
        let source = self.props.source.clone();
        let uri = source.uri.clone();
        let (element, load) = MediaElement::mount(backend, source, &self.playback_props());
        self.element = Some(element);
        load.map(move |event| Message::Media {
            uri: uri.clone(),
            event,
        })
    }

    /// Applies a message; returns host callbacks to deliver, in order, and
    /// follow-up work.
    pub fn handle_message(&mut self, message: Message) -> (Vec<H>, Task<Message>) {
        let mut outputs = Vec::new();
        let mut task = Task::none();

        match message {
            Message::TogglePlayback => {
                self.paused = !self.paused;
                self.sync();
            }
            Message::ToggleMute => {
                self.muted = !self.muted;
                self.sync();
            }
            Message::ToggleLoop => {
                self.loop_enabled = !self.loop_enabled;
                self.sync();
            }
            Message::CycleRate => {
                self.rate = self.rate.next();
                self.sync();
            }
            Message::ToggleFullscreen => {
                task = if self.display == DisplayMode::Fullscreen {
                    self.exit_fullscreen(&mut outputs)
                } else {
                    self.enter_fullscreen(&mut outputs)
                };
            }
            Message::ToggleMinimize => match self.display {
                DisplayMode::Fullscreen => {
                    let lock = self.exit_fullscreen(&mut outputs);
                    let delay = self.settings.minimize_delay;
                    let instance = self.instance;
                    let timer = Task::perform(tokio::time::sleep(delay), move |()| {
                        Message::MinimizeDelayElapsed(instance)
                    });
                    task = Task::batch([lock, timer]);
                }
                DisplayMode::Normal => self.display = DisplayMode::Minimized,
                DisplayMode::Minimized => self.display = DisplayMode::Normal,
            },
            Message::MinimizeDelayElapsed(instance) if instance != self.instance => {
                tracing::trace!(instance, "ignoring minimize timer from another player");
            }
            Message::MinimizeDelayElapsed(_) => {
                if self.display == DisplayMode::Fullscreen {
                    task = self.exit_fullscreen(&mut outputs);
                }
                self.display = DisplayMode::Minimized;
            }
            Message::Restore => {
                if self.display == DisplayMode::Minimized {
                    self.display = DisplayMode::Normal;
                }
            }
            Message::Close => {
                if self.display == DisplayMode::Minimized {
                    self.display = DisplayMode::Normal;
                    self.paused = true;
                    self.sync();
                    task = self.orientation.lock_to_portrait().discard();
                    self.emit_fullscreen_change(false, &mut outputs);
                    outputs.extend(self.props.callbacks.on_close.clone());
                }
            }
            Message::SeekPreview(secs) => {
                self.seek_preview = Some(clamp_position(secs, self.duration));
            }
            Message::SeekCommit => {
                if let Some(secs) = self.seek_preview.take() {
                    self.seek(secs);
                }
            }
            Message::Seek(secs) => {
                self.seek_preview = None;
                self.seek(secs);
            }
            Message::Media { uri, event } => {
                if uri == self.props.source.uri {
                    self.apply_media_event(event, &mut outputs);
                } else {
                    tracing::trace!(%uri, ?event, "dropping event for stale source");
                }
            }
            Message::DragStarted => {
                if let (DisplayMode::Minimized, Some(cursor)) = (self.display, self.cursor) {
                    self.mini.begin_drag(cursor);
                }
            }
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                if self.display == DisplayMode::Minimized {
                    self.mini.drag_to(position);
                }
            }
            Message::DragEnded => {
                self.mini.end_drag(self.viewport, Instant::now());
            }
            Message::SurfaceTapped => {
                if self.display == DisplayMode::Fullscreen {
                    self.show_controls = !self.show_controls;
                }
            }
            Message::Next => outputs.extend(self.props.callbacks.on_next.clone()),
            Message::Back => outputs.extend(self.props.callbacks.on_back.clone()),
            Message::ViewportResized(size) => {
                self.viewport = size;
                self.mini.fit(size);
            }
            Message::Tick(now) => {
                self.mini.tick(now);
                let events = self
                    .element
                    .as_mut()
                    .map(|element| element.tick(now))
                    .unwrap_or_default();
                for event in events {
                    self.apply_media_event(event, &mut outputs);
                }
            }
        }

        (outputs, task)
    }

    fn apply_media_event(&mut self, event: MediaEvent, outputs: &mut Vec<H>) {
        match event {
            MediaEvent::Loaded { duration_secs } => {
                self.duration = if duration_secs.is_finite() {
                    duration_secs.max(0.0)
                } else {
                    0.0
                };
                self.current_time = clamp_position(self.current_time, self.duration);
                tracing::debug!(
                    uri = %self.props.source.uri,
                    duration = self.duration,
                    "media loaded"
                );
            }
            MediaEvent::Progress { current_time } => {
                self.current_time = clamp_position(current_time, self.duration);
            }
            MediaEvent::Ended => {
                if self.loop_enabled {
                    self.seek(0.0);
                    self.paused = false;
                    self.sync();
                } else {
                    outputs.extend(self.props.callbacks.on_next.clone());
                }
            }
        }
    }

    fn enter_fullscreen(&mut self, outputs: &mut Vec<H>) -> Task<Message> {
        self.display = DisplayMode::Fullscreen;
        self.show_controls = true;
        self.sync();
        self.emit_fullscreen_change(true, outputs);
        self.orientation.lock_to_landscape().discard()
    }

    fn exit_fullscreen(&mut self, outputs: &mut Vec<H>) -> Task<Message> {
        self.display = DisplayMode::Normal;
        self.sync();
        self.emit_fullscreen_change(false, outputs);
        self.orientation.lock_to_portrait().discard()
    }

    fn emit_fullscreen_change(&self, fullscreen: bool, outputs: &mut Vec<H>) {
        if let Some(callback) = self.props.callbacks.on_fullscreen_change {
            outputs.push(callback(fullscreen));
        }
    }

    /// Optimistic seek: the displayed position moves before the backend
    /// confirms it.
    fn seek(&mut self, secs: f64) {
        let target = clamp_position(secs, self.duration);
        self.current_time = target;
        if let Some(element) = self.element.as_mut() {
            element.seek(target);
        }
    }

    fn sync(&mut self) {
        let props = self.playback_props();
        if let Some(element) = self.element.as_mut() {
            element.apply(&props);
        }
    }
}

impl<H> State<H> {
    /// Ticks for the media backend, plus animation frames while the mini
    /// window is snapping back.
    pub fn subscription(&self) -> Subscription<Message> {
        let media = iced::time::every(self.settings.progress_interval).map(Message::Tick);
        if self.mini.is_animating() {
            let frames = iced::time::every(Duration::from_millis(defaults::ANIMATION_FRAME_MS))
                .map(Message::Tick);
            Subscription::batch([media, frames])
        } else {
            media
        }
    }

    #[must_use]
    pub fn playback_props(&self) -> PlaybackProps {
        PlaybackProps {
            paused: self.paused,
            muted: self.muted,
            rate: self.rate.value(),
            repeat: self.loop_enabled,
            resize: if self.display == DisplayMode::Fullscreen {
                ResizeMode::Cover
            } else {
                ResizeMode::Contain
            },
        }
    }

    #[must_use]
    pub fn control_state(&self) -> ControlState {
        ControlState {
            paused: self.paused,
            muted: self.muted,
            loop_enabled: self.loop_enabled,
            fullscreen: self.display == DisplayMode::Fullscreen,
        }
    }

    #[must_use]
    pub fn props(&self) -> &PlayerProps<H> {
        &self.props
    }

    #[must_use]
    pub fn source(&self) -> &VideoSource {
        &self.props.source
    }

    #[must_use]
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    /// Identifies this player in its own delayed messages.
    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.instance
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.display == DisplayMode::Fullscreen
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.display == DisplayMode::Minimized
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.loop_enabled
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Position shown by the scrub bar: the drag preview if any.
    #[must_use]
    pub fn displayed_time(&self) -> f64 {
        self.seek_preview.unwrap_or(self.current_time)
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.show_controls
    }

    #[must_use]
    pub fn mini_position(&self) -> Point {
        self.mini.position()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mini.is_dragging()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }
}
