// SPDX-License-Identifier: MPL-2.0
//! Duration probing with FFmpeg.

use crate::error::MediaError;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times; initialization happens once. The FFmpeg log
/// level is lowered to ERROR so probing doesn't flood stderr with container
/// warnings.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Strips a `file://` scheme; other URIs are handed to FFmpeg as-is.
#[must_use]
pub fn input_location(uri: &str) -> &str {
    uri.strip_prefix("file://").unwrap_or(uri)
}

/// Returns the duration of the best video stream in seconds.
///
/// Blocking: opens the source and reads its headers.
pub fn probe_duration(uri: &str) -> Result<f64, MediaError> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&input_location(uri))
        .map_err(|e| MediaError::from_message(&e.to_string()))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(MediaError::NoVideoStream)?;

    // Stream duration in time_base units, else the container duration.
    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    if duration_secs.is_finite() && duration_secs > 0.0 {
        Ok(duration_secs)
    } else {
        Err(MediaError::UnknownDuration)
    }
}
