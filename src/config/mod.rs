// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[player]` - Mini player geometry and timing
//! - `[styles.list.<slot>]` / `[styles.player.<slot>]` - Style overrides
//! - `[icons]` - Custom icon files keyed by slot
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_CLIPS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_clips::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional load error)
//! let (mut config, _error) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::icons::IconOverrides;
use crate::ui::styles::StyleOverrides;
use crate::ui::theming::ThemeMode;
use crate::ui::video_player::Settings;
use iced::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Player geometry and timing. Unset values use the defaults; out-of-range
/// values are clamped when converted to [`Settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    #[serde(
        default = "default_minimize_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimize_delay_ms: Option<u64>,

    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_margin: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_height: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            minimize_delay_ms: default_minimize_delay_ms(),
            progress_interval_ms: default_progress_interval_ms(),
            mini_width: None,
            mini_height: None,
            mini_margin: None,
            video_height: None,
        }
    }
}

impl PlayerConfig {
    /// Resolved player settings with every value inside its accepted range.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let positive = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        Settings {
            minimize_delay: Duration::from_millis(
                self.minimize_delay_ms
                    .unwrap_or(DEFAULT_MINIMIZE_DELAY_MS)
                    .min(MAX_MINIMIZE_DELAY_MS),
            ),
            progress_interval: Duration::from_millis(
                self.progress_interval_ms
                    .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS)
                    .clamp(MIN_PROGRESS_INTERVAL_MS, MAX_PROGRESS_INTERVAL_MS),
            ),
            mini_size: Size::new(
                positive(self.mini_width, DEFAULT_MINI_WIDTH),
                positive(self.mini_height, DEFAULT_MINI_HEIGHT),
            ),
            mini_margin: self
                .mini_margin
                .filter(|m| m.is_finite() && *m >= 0.0)
                .unwrap_or(DEFAULT_MINI_MARGIN),
            video_height: positive(self.video_height, DEFAULT_VIDEO_HEIGHT)
                .max(MIN_VIDEO_HEIGHT),
            snap_duration: Duration::from_millis(SNAP_ANIMATION_MS),
        }
    }
}

/// Style overrides per component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StylesConfig {
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub list: StyleOverrides,

    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub player: StyleOverrides,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub styles: StylesConfig,

    #[serde(default, skip_serializing_if = "IconOverrides::is_empty")]
    pub icons: IconOverrides,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_minimize_delay_ms() -> Option<u64> {
    Some(DEFAULT_MINIMIZE_DELAY_MS)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration, falling back to defaults.
///
/// A file that exists but fails to parse yields the defaults together with
/// the error so the caller can report it.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(error) => (Config::default(), Some(error)),
            };
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
