// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playlist(String),
    Media(MediaError),
}

/// Reasons a media source could not be probed.
///
/// These never reach the host application: the player logs them and keeps
/// its last state. The classification only feeds the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The URI could not be opened (missing file, unreachable host, permissions).
    Unreachable(String),

    /// The source opened but contains no video stream.
    NoVideoStream,

    /// The container reports no usable duration.
    UnknownDuration,

    /// Generic error with raw message
    Other(String),
}

impl MediaError {
    /// Categorizes a raw FFmpeg error message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("connection refused")
            || msg_lower.contains("i/o error")
        {
            return MediaError::Unreachable(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return MediaError::NoVideoStream;
        }

        MediaError::Other(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Unreachable(msg) => write!(f, "Source unreachable: {}", msg),
            MediaError::NoVideoStream => write!(f, "No video stream found"),
            MediaError::UnknownDuration => write!(f, "Source reports no duration"),
            MediaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playlist(e) => write!(f, "Playlist Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn playlist_error_formats_properly() {
        let err = Error::Playlist("duplicate id 'a'".into());
        assert_eq!(format!("{}", err), "Playlist Error: duplicate id 'a'");
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn media_error_from_message_unreachable() {
        let err = MediaError::from_message("No such file or directory");
        assert!(matches!(err, MediaError::Unreachable(_)));
    }

    #[test]
    fn media_error_from_message_no_stream() {
        let err = MediaError::from_message("No video stream found in file");
        assert_eq!(err, MediaError::NoVideoStream);
    }

    #[test]
    fn media_error_from_message_fallback() {
        let err = MediaError::from_message("Invalid data found when processing input");
        assert!(matches!(err, MediaError::Other(_)));
    }

    #[test]
    fn media_error_wraps_into_error() {
        let err: Error = MediaError::NoVideoStream.into();
        assert_eq!(format!("{}", err), "Media Error: No video stream found");
    }
}
