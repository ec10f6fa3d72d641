// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Mini player**: Size and placement of the minimized window
//! - **Timing**: Minimize delay, progress cadence, snap animation
//! - **Layout**: Normal-mode video height

// ==========================================================================
// Mini Player Defaults
// ==========================================================================

/// Width of the minimized player window in logical pixels.
pub const DEFAULT_MINI_WIDTH: f32 = 250.0;

/// Height of the minimized player window in logical pixels.
pub const DEFAULT_MINI_HEIGHT: f32 = 150.0;

/// Gap kept between the initial mini window and the viewport corner.
pub const DEFAULT_MINI_MARGIN: f32 = 10.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay between leaving fullscreen and showing the mini player (ms).
pub const DEFAULT_MINIMIZE_DELAY_MS: u64 = 300;

/// Upper bound for the minimize delay (ms).
pub const MAX_MINIMIZE_DELAY_MS: u64 = 2_000;

/// Interval between progress events from the timeline backend (ms).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 250;

/// Fastest accepted progress cadence (ms).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 50;

/// Slowest accepted progress cadence (ms).
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 1_000;

/// Duration of the snap-back animation after a mini window drag (ms).
pub const SNAP_ANIMATION_MS: u64 = 250;

/// Frame interval while an animation is running (ms).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the video surface in normal (non-fullscreen) mode.
pub const DEFAULT_VIDEO_HEIGHT: f32 = 250.0;

/// Smallest accepted normal-mode video height.
pub const MIN_VIDEO_HEIGHT: f32 = 120.0;
