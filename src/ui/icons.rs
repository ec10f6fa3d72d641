// SPDX-License-Identifier: MPL-2.0
//! Control icons: built-in SVG set plus per-slot custom replacements.
//!
//! Built-in icons are embedded at compile time from `assets/icons/` and their
//! handles are cached in a `OnceLock` on first use. A caller may replace any
//! slot with an SVG or raster file; [`resolve_asset`] is the single place
//! deciding which asset a control shows for a given player state.
//!
//! ```
//! use iced_clips::ui::icons::{resolve_asset, AssetRef, Control, ControlState, IconOverrides, IconSlot};
//!
//! let state = ControlState { muted: true, ..ControlState::default() };
//! let asset = resolve_asset(Control::Mute, &state, &IconOverrides::default());
//! assert_eq!(asset, AssetRef::Builtin(IconSlot::Unmute));
//! ```

use iced::widget::{image, svg};
use iced::{Element, Length};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct BuiltinIcons;

/// Replaceable icon slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconSlot {
    Play,
    Pause,
    Mute,
    Unmute,
    Pip,
    Fullscreen,
    Loop,
    Unloop,
    Next,
    Back,
    Close,
    Mini,
}

impl IconSlot {
    pub const ALL: [IconSlot; 12] = [
        IconSlot::Play,
        IconSlot::Pause,
        IconSlot::Mute,
        IconSlot::Unmute,
        IconSlot::Pip,
        IconSlot::Fullscreen,
        IconSlot::Loop,
        IconSlot::Unloop,
        IconSlot::Next,
        IconSlot::Back,
        IconSlot::Close,
        IconSlot::Mini,
    ];

    /// File name of the built-in icon.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            IconSlot::Play => "play.svg",
            IconSlot::Pause => "pause.svg",
            IconSlot::Mute => "mute.svg",
            IconSlot::Unmute => "unmute.svg",
            IconSlot::Pip => "pip.svg",
            IconSlot::Fullscreen => "fullscreen.svg",
            IconSlot::Loop => "loop.svg",
            IconSlot::Unloop => "unloop.svg",
            IconSlot::Next => "next.svg",
            IconSlot::Back => "back.svg",
            IconSlot::Close => "close.svg",
            IconSlot::Mini => "mini.svg",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A caller-supplied icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomIcon {
    Svg(PathBuf),
    Raster(PathBuf),
}

impl CustomIcon {
    /// Picks the renderer from the file extension; anything but `.svg` is raster.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            CustomIcon::Svg(path.to_path_buf())
        } else {
            CustomIcon::Raster(path.to_path_buf())
        }
    }
}

/// What a control ends up drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Builtin(IconSlot),
    Custom(CustomIcon),
}

/// Custom icon files keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconOverrides(HashMap<IconSlot, PathBuf>);

impl IconOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, slot: IconSlot, path: impl Into<PathBuf>) -> Self {
        self.0.insert(slot, path.into());
        self
    }

    #[must_use]
    pub fn get(&self, slot: IconSlot) -> Option<CustomIcon> {
        self.0.get(&slot).map(|path| CustomIcon::from_path(path))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Player controls that carry an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    Mute,
    Loop,
    Fullscreen,
    Minimize,
    Restore,
    Close,
    Next,
    Back,
}

/// The part of the player state that icon choice depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub paused: bool,
    pub muted: bool,
    pub loop_enabled: bool,
    pub fullscreen: bool,
}

/// Slot shown by `control` in `state`.
#[must_use]
pub fn slot_for(control: Control, state: &ControlState) -> IconSlot {
    match control {
        Control::PlayPause if state.paused => IconSlot::Play,
        Control::PlayPause => IconSlot::Pause,
        Control::Mute if state.muted => IconSlot::Unmute,
        Control::Mute => IconSlot::Mute,
        Control::Loop if state.loop_enabled => IconSlot::Loop,
        Control::Loop => IconSlot::Unloop,
        Control::Fullscreen if state.fullscreen => IconSlot::Mini,
        Control::Fullscreen => IconSlot::Fullscreen,
        Control::Minimize => IconSlot::Pip,
        Control::Restore => IconSlot::Mini,
        Control::Close => IconSlot::Close,
        Control::Next => IconSlot::Next,
        Control::Back => IconSlot::Back,
    }
}

/// Custom icon for the slot if one was supplied, else the built-in.
#[must_use]
pub fn resolve_asset(control: Control, state: &ControlState, overrides: &IconOverrides) -> AssetRef {
    let slot = slot_for(control, state);
    overrides
        .get(slot)
        .map_or(AssetRef::Builtin(slot), AssetRef::Custom)
}

/// Cached handle for a built-in icon.
pub fn builtin_handle(slot: IconSlot) -> svg::Handle {
    static HANDLES: OnceLock<Vec<svg::Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| IconSlot::ALL.iter().map(|s| load_builtin(*s)).collect());
    handles[slot.index()].clone()
}

fn load_builtin(slot: IconSlot) -> svg::Handle {
    match BuiltinIcons::get(slot.file_name()) {
        Some(file) => svg::Handle::from_memory(file.data.into_owned()),
        None => {
            tracing::warn!(icon = slot.file_name(), "built-in icon missing");
            svg::Handle::from_memory(Vec::new())
        }
    }
}

/// Renders an asset as a square of `size` logical pixels.
pub fn view<'a, Message: 'a>(asset: &AssetRef, size: f32) -> Element<'a, Message> {
    match asset {
        AssetRef::Builtin(slot) => svg(builtin_handle(*slot))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        AssetRef::Custom(CustomIcon::Svg(path)) => svg(svg::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        AssetRef::Custom(CustomIcon::Raster(path)) => image(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    }
}
