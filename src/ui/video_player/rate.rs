// SPDX-License-Identifier: MPL-2.0
//! Playback rate cycled by the rate button.

/// One of the three rates offered by the player.
///
/// # Example
///
/// ```
/// use iced_clips::ui::video_player::PlaybackRate;
///
/// let rate = PlaybackRate::default();
/// assert_eq!(rate.label(), "1x");
/// assert_eq!(rate.next().label(), "0.5x");
/// assert_eq!(rate.next().next().next(), rate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    Half,
    #[default]
    Normal,
    Double,
}

impl PlaybackRate {
    /// Cycles 1x → 0.5x → 2x → 1x.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PlaybackRate::Normal => PlaybackRate::Half,
            PlaybackRate::Half => PlaybackRate::Double,
            PlaybackRate::Double => PlaybackRate::Normal,
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::Double => 2.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::Double => "2x",
        }
    }
}
