// SPDX-License-Identifier: MPL-2.0
use iced::{Size, Task};
use iced_clips::media::{MediaBackend, MediaEvent, PlaybackProps, ResizeMode, VideoSource};
use iced_clips::platform::NoOrientation;
use iced_clips::ui::video_player::{
    Callbacks, DisplayMode, Message, PlaybackRate, PlayerProps, Settings, State,
};
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
enum Host {
    Next,
    Back,
    Close,
    Fullscreen(bool),
}

#[derive(Debug, Default)]
struct Log {
    loads: Vec<String>,
    seeks: Vec<f64>,
    props: Vec<PlaybackProps>,
    pending: Vec<MediaEvent>,
}

/// Backend that records calls and replays queued events on the next tick.
#[derive(Debug, Clone, Default)]
struct FakeBackend {
    log: Arc<Mutex<Log>>,
}

impl FakeBackend {
    fn with_log<T>(&self, f: impl FnOnce(&mut Log) -> T) -> T {
        let mut log = self.log.lock().expect("log lock");
        f(&mut log)
    }

    fn queue(&self, event: MediaEvent) {
        self.with_log(|log| log.pending.push(event));
    }

    fn last_props(&self) -> PlaybackProps {
        self.with_log(|log| *log.props.last().expect("props applied"))
    }
}

impl MediaBackend for FakeBackend {
    fn load(&mut self, source: &VideoSource) -> Task<MediaEvent> {
        self.with_log(|log| log.loads.push(source.uri.clone()));
        Task::none()
    }

    fn apply(&mut self, props: &PlaybackProps) {
        self.with_log(|log| log.props.push(*props));
    }

    fn seek(&mut self, secs: f64) {
        self.with_log(|log| log.seeks.push(secs));
    }

    fn tick(&mut self, _now: Instant) -> Vec<MediaEvent> {
        self.with_log(|log| std::mem::take(&mut log.pending))
    }
}

fn fullscreen(value: bool) -> Host {
    Host::Fullscreen(value)
}

fn player_props(uri: &str) -> PlayerProps<Host> {
    let mut props = PlayerProps::new(VideoSource::new(uri), "Clip");
    props.callbacks = Callbacks {
        on_next: Some(Host::Next),
        on_back: Some(Host::Back),
        on_close: Some(Host::Close),
        on_fullscreen_change: Some(fullscreen),
    };
    props
}

fn new_player(uri: &str) -> (State<Host>, FakeBackend) {
    let backend = FakeBackend::default();
    let (player, _task) = State::new(
        player_props(uri),
        Box::new(backend.clone()),
        Box::new(NoOrientation),
        Settings::default(),
        Size::new(800.0, 600.0),
    );
    (player, backend)
}

fn send(player: &mut State<Host>, message: Message) -> Vec<Host> {
    player.handle_message(message).0
}

fn loaded(player: &mut State<Host>, duration_secs: f64) {
    let uri = player.source().uri.clone();
    send(
        player,
        Message::Media {
            uri,
            event: MediaEvent::Loaded { duration_secs },
        },
    );
}

#[test]
fn test_end_of_media_advances_without_loop() {
    let (mut player, backend) = new_player("a.mp4");
    loaded(&mut player, 10.0);

    backend.queue(MediaEvent::Progress { current_time: 10.0 });
    backend.queue(MediaEvent::Ended);
    let outputs = send(&mut player, Message::Tick(Instant::now()));

    assert_eq!(outputs, vec![Host::Next]);
    assert_eq!(player.current_time(), 10.0);
}

#[test]
fn test_end_of_media_restarts_with_loop() {
    let (mut player, backend) = new_player("a.mp4");
    loaded(&mut player, 10.0);
    send(&mut player, Message::ToggleLoop);
    assert!(backend.last_props().repeat);

    backend.queue(MediaEvent::Ended);
    let outputs = send(&mut player, Message::Tick(Instant::now()));

    assert!(outputs.is_empty());
    assert_eq!(player.current_time(), 0.0);
    assert_eq!(backend.with_log(|log| log.seeks.clone()), vec![0.0]);
}

#[test]
fn test_rate_cycle_reaches_backend() {
    let (mut player, backend) = new_player("a.mp4");
    send(&mut player, Message::CycleRate);
    assert_eq!(player.rate(), PlaybackRate::Half);
    assert_eq!(backend.last_props().rate, 0.5);

    send(&mut player, Message::CycleRate);
    assert_eq!(backend.last_props().rate, 2.0);
    send(&mut player, Message::CycleRate);
    assert_eq!(backend.last_props().rate, 1.0);
}

#[test]
fn test_scrub_preview_then_commit() {
    let (mut player, backend) = new_player("a.mp4");
    loaded(&mut player, 60.0);

    send(&mut player, Message::SeekPreview(30.0));
    assert_eq!(player.displayed_time(), 30.0);
    assert_eq!(player.current_time(), 0.0);
    assert!(backend.with_log(|log| log.seeks.is_empty()));

    send(&mut player, Message::SeekCommit);
    assert_eq!(player.current_time(), 30.0);
    assert_eq!(backend.with_log(|log| log.seeks.clone()), vec![30.0]);
}

#[test]
fn test_fullscreen_minimize_restore_close_sequence() {
    let (mut player, _backend) = new_player("a.mp4");

    assert_eq!(
        send(&mut player, Message::ToggleFullscreen),
        vec![Host::Fullscreen(true)]
    );
    assert_eq!(player.display(), DisplayMode::Fullscreen);

    // Minimizing from fullscreen leaves fullscreen now and minimizes later.
    assert_eq!(
        send(&mut player, Message::ToggleMinimize),
        vec![Host::Fullscreen(false)]
    );
    assert_eq!(player.display(), DisplayMode::Normal);
    let instance = player.instance_id();
    send(&mut player, Message::MinimizeDelayElapsed(instance));
    assert_eq!(player.display(), DisplayMode::Minimized);

    send(&mut player, Message::Restore);
    assert_eq!(player.display(), DisplayMode::Normal);

    send(&mut player, Message::ToggleMinimize);
    let outputs = send(&mut player, Message::Close);
    assert_eq!(outputs, vec![Host::Fullscreen(false), Host::Close]);
    assert!(player.is_paused());
    assert_eq!(player.display(), DisplayMode::Normal);
}

#[test]
fn test_fullscreen_switches_resize_mode() {
    let (mut player, backend) = new_player("a.mp4");
    assert_eq!(backend.last_props().resize, ResizeMode::Contain);

    send(&mut player, Message::ToggleFullscreen);
    assert_eq!(backend.last_props().resize, ResizeMode::Cover);

    send(&mut player, Message::ToggleFullscreen);
    assert_eq!(backend.last_props().resize, ResizeMode::Contain);
}

#[test]
fn test_source_change_resets_position_but_keeps_preferences() {
    let (mut player, backend) = new_player("a.mp4");
    loaded(&mut player, 60.0);
    send(&mut player, Message::Seek(20.0));
    send(&mut player, Message::ToggleMute);
    send(&mut player, Message::TogglePlayback);

    let _ = player.set_props(player_props("b.mp4"));

    assert_eq!(
        backend.with_log(|log| log.loads.clone()),
        vec!["a.mp4".to_string(), "b.mp4".to_string()]
    );
    assert_eq!(player.current_time(), 0.0);
    assert_eq!(player.duration(), 0.0);
    assert!(!player.is_paused());
    assert!(player.is_muted());
}

#[test]
fn test_missing_callbacks_are_noops() {
    let backend = FakeBackend::default();
    let (mut player, _task) = State::<Host>::new(
        PlayerProps::new(VideoSource::new("a.mp4"), "Clip"),
        Box::new(backend.clone()),
        Box::new(NoOrientation),
        Settings::default(),
        Size::new(800.0, 600.0),
    );

    assert!(send(&mut player, Message::Next).is_empty());
    assert!(send(&mut player, Message::Back).is_empty());
    assert!(send(&mut player, Message::ToggleFullscreen).is_empty());
    assert!(player.is_fullscreen());
}
