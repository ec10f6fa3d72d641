// SPDX-License-Identifier: MPL-2.0
//! Application root: a playlist beside a player.
//!
//! The `App` owns the playlist, the current selection and at most one
//! player. Player callbacks come back as ordinary [`Message`]s, so all
//! selection policy (next, back with wrap-around, close) lives here.

mod message;
pub mod paths;
pub mod playlist;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::{ClockBackend, VideoItem};
use crate::platform::WindowOrientation;
use crate::ui::video_player::{self, Callbacks, PlayerProps};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    videos: Vec<VideoItem>,
    selected_id: Option<String>,
    player: Option<video_player::State<Message>>,
    orientation: WindowOrientation,
    window_size: Size,
    /// Resolved once at startup; `System` queries the OS.
    theme: Theme,
    /// Last value reported through the player's fullscreen callback.
    fullscreen: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("videos", &self.videos.len())
            .field("selected_id", &self.selected_id)
            .field("has_player", &self.player.is_some())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and localization, then starts playing the first video.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = config::load();
        if let Some(error) = config_error {
            tracing::warn!(%error, "invalid settings file, using defaults");
        }
        let i18n = I18n::new(flags.lang, &config);
        Self::with_parts(config, i18n, flags.videos)
    }

    /// Builds the app from already-loaded parts. The first video, if any,
    /// is selected.
    pub(crate) fn with_parts(
        config: Config,
        i18n: I18n,
        videos: Vec<VideoItem>,
    ) -> (Self, Task<Message>) {
        let theme = config.general.theme_mode.to_theme();
        let mut app = Self {
            i18n,
            config,
            videos,
            selected_id: None,
            player: None,
            orientation: WindowOrientation::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            theme,
            fullscreen: false,
        };
        tracing::info!(videos = app.videos.len(), "playlist ready");

        let task = match app.videos.first().cloned() {
            Some(first) => app.select(first),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let key = if self.fullscreen {
            "window-title-fullscreen"
        } else {
            "window-title"
        };
        let app_name = self.i18n.tr(key);

        match self.selected_video() {
            Some(video) => format!("{} - {app_name}", video.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();
        match &self.player {
            Some(player) => Subscription::batch([
                events,
                player.subscription().map(Message::Player),
            ]),
            None => events,
        }
    }

    fn selected_video(&self) -> Option<&VideoItem> {
        let id = self.selected_id.as_deref()?;
        self.videos.iter().find(|video| video.id == id)
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.videos.iter().position(|video| video.id == id)
    }

    /// Selects `item` and feeds it to the player, creating one if needed.
    fn select(&mut self, item: VideoItem) -> Task<Message> {
        tracing::debug!(id = %item.id, uri = %item.uri, "video selected");
        self.selected_id = Some(item.id.clone());
        let props = self.player_props(&item);

        if let Some(player) = self.player.as_mut() {
            return player.set_props(props).map(Message::Player);
        }

        let (player, task) = video_player::State::new(
            props,
            Box::new(ClockBackend::default()),
            Box::new(self.orientation.clone()),
            self.config.player.settings(),
            self.window_size,
        );
        self.player = Some(player);
        task.map(Message::Player)
    }

    fn player_props(&self, item: &VideoItem) -> PlayerProps<Message> {
        let mut props = PlayerProps::new(item.source(), item.title.clone());
        props.description = item.description().map(str::to_owned);
        props.tags = item.tags.clone();
        props.callbacks = Callbacks {
            on_next: Some(Message::PlayerNext),
            on_back: Some(Message::PlayerBack),
            on_close: Some(Message::PlayerClosed),
            on_fullscreen_change: Some(Message::FullscreenChanged),
        };
        props.styles = self.config.styles.player.clone();
        props.icons = self.config.icons.clone();
        props
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            videos: &self.videos,
            selected_id: self.selected_id.as_deref(),
            player: self.player.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::video_player::{DisplayMode, Message as PlayerMessage};
    use iced::Point;

    fn video(id: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            uri: format!("file:///videos/{id}.mp4"),
            description: None,
            tags: Vec::new(),
        }
    }

    fn english() -> I18n {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().expect("valid locale"));
        i18n
    }

    fn app_with(ids: &[&str]) -> App {
        let videos = ids.iter().map(|id| video(id)).collect();
        let (app, _task) = App::with_parts(Config::default(), english(), videos);
        app
    }

    fn player(app: &App) -> &video_player::State<Message> {
        app.player.as_ref().expect("player should exist")
    }

    #[test]
    fn first_video_is_selected_on_start() {
        let app = app_with(&["a", "b"]);
        assert_eq!(app.selected_id.as_deref(), Some("a"));
        assert_eq!(player(&app).source().uri, "file:///videos/a.mp4");
        assert_eq!(player(&app).props().title, "Title a");
    }

    #[test]
    fn empty_playlist_starts_without_player() {
        let app = app_with(&[]);
        assert!(app.player.is_none());
        assert!(app.selected_id.is_none());
        assert_eq!(app.title(), "IcedClips");
    }

    #[test]
    fn title_includes_selected_video() {
        let app = app_with(&["a"]);
        assert_eq!(app.title(), "Title a - IcedClips");
    }

    #[test]
    fn selecting_a_row_switches_the_player_source() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.update(Message::VideoSelected(video("b")));
        assert_eq!(app.selected_id.as_deref(), Some("b"));
        assert_eq!(player(&app).source().uri, "file:///videos/b.mp4");
    }

    #[test]
    fn next_advances_and_wraps_around() {
        let mut app = app_with(&["a", "b", "c"]);
        let _ = app.update(Message::PlayerNext);
        assert_eq!(app.selected_id.as_deref(), Some("b"));
        let _ = app.update(Message::PlayerNext);
        let _ = app.update(Message::PlayerNext);
        assert_eq!(app.selected_id.as_deref(), Some("a"));
    }

    #[test]
    fn back_retreats_and_wraps_around() {
        let mut app = app_with(&["a", "b", "c"]);
        let _ = app.update(Message::PlayerBack);
        assert_eq!(app.selected_id.as_deref(), Some("c"));
        assert_eq!(player(&app).source().uri, "file:///videos/c.mp4");
    }

    #[test]
    fn next_button_in_player_reaches_the_host() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.update(Message::Player(PlayerMessage::Next));
        assert_eq!(app.selected_id.as_deref(), Some("b"));
    }

    #[test]
    fn fullscreen_callback_is_recorded_in_title() {
        let mut app = app_with(&["a"]);
        let _ = app.update(Message::Player(PlayerMessage::ToggleFullscreen));
        assert!(app.fullscreen);
        assert_eq!(app.title(), "Title a - IcedClips (fullscreen)");

        let _ = app.update(Message::Player(PlayerMessage::ToggleFullscreen));
        assert!(!app.fullscreen);
    }

    #[test]
    fn closing_the_mini_player_drops_it_and_clears_selection() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.update(Message::Player(PlayerMessage::ToggleMinimize));
        assert_eq!(player(&app).display(), DisplayMode::Minimized);

        let _ = app.update(Message::Player(PlayerMessage::Close));
        assert!(app.player.is_none());
        assert!(app.selected_id.is_none());
        assert!(!app.fullscreen);
    }

    #[test]
    fn selecting_after_close_creates_a_new_player() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.update(Message::PlayerClosed);
        assert!(app.player.is_none());

        let _ = app.update(Message::VideoSelected(video("b")));
        assert_eq!(player(&app).source().uri, "file:///videos/b.mp4");
        assert_eq!(player(&app).display(), DisplayMode::Normal);
    }

    #[test]
    fn minimize_timer_of_a_closed_player_leaves_the_next_one_alone() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.update(Message::Player(PlayerMessage::ToggleFullscreen));
        let _ = app.update(Message::Player(PlayerMessage::ToggleMinimize));
        let stale = player(&app).instance_id();

        let _ = app.update(Message::Player(PlayerMessage::ToggleMinimize));
        let _ = app.update(Message::Player(PlayerMessage::Close));
        assert!(app.player.is_none());

        let _ = app.update(Message::VideoSelected(video("b")));
        let _ = app.update(Message::Player(PlayerMessage::MinimizeDelayElapsed(stale)));
        assert_eq!(player(&app).display(), DisplayMode::Normal);
        assert!(!app.fullscreen);
    }

    #[test]
    fn player_messages_without_player_are_ignored() {
        let mut app = app_with(&[]);
        let _ = app.update(Message::Player(PlayerMessage::MinimizeDelayElapsed(1)));
        let _ = app.update(Message::CursorMoved(Point::new(10.0, 10.0)));
        let _ = app.update(Message::ButtonReleased);
        assert!(app.player.is_none());
    }

    #[test]
    fn window_resize_is_recorded() {
        let mut app = app_with(&["a"]);
        let size = Size::new(900.0, 700.0);
        let _ = app.update(Message::WindowResized(window::Id::unique(), size));
        assert_eq!(app.window_size, size);
    }

    #[test]
    fn mini_player_drag_follows_routed_cursor_events() {
        let mut app = app_with(&["a"]);
        let _ = app.update(Message::WindowResized(
            window::Id::unique(),
            Size::new(800.0, 600.0),
        ));
        let _ = app.update(Message::Player(PlayerMessage::ToggleMinimize));
        let start = player(&app).mini_position();

        let _ = app.update(Message::CursorMoved(Point::new(start.x + 5.0, start.y + 5.0)));
        let _ = app.update(Message::Player(PlayerMessage::DragStarted));
        let _ = app.update(Message::CursorMoved(Point::new(start.x - 95.0, start.y - 45.0)));
        assert_eq!(
            player(&app).mini_position(),
            Point::new(start.x - 100.0, start.y - 50.0)
        );

        let _ = app.update(Message::ButtonReleased);
        assert!(!player(&app).is_dragging());
    }

    #[test]
    fn config_overrides_reach_the_player() {
        use crate::ui::styles::{Style, StyleOverrides, StyleSlot};

        let mut config = Config::default();
        config.styles.player = StyleOverrides::new().with(
            StyleSlot::Controls,
            Style {
                spacing: Some(12.0),
                ..Style::EMPTY
            },
        );
        let (app, _) = App::with_parts(config, english(), vec![video("a")]);
        assert!(player(&app).props().styles.get(StyleSlot::Controls).is_some());
    }
}
