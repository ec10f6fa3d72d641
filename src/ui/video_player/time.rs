// SPDX-License-Identifier: MPL-2.0
//! Time helpers for the transport bar.

/// Formats seconds as `MM:SS`.
///
/// Fractions are floored, minutes are not capped at 59 and negative or NaN
/// input is shown as zero.
///
/// ```
/// use iced_clips::ui::video_player::format_time;
///
/// assert_eq!(format_time(65.0), "01:05");
/// assert_eq!(format_time(3661.0), "61:01");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Clamps a position into `[0, duration]`; NaN becomes 0.
#[must_use]
pub fn clamp_position(secs: f64, duration: f64) -> f64 {
    let upper = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };
    if secs.is_nan() {
        0.0
    } else {
        secs.clamp(0.0, upper)
    }
}
