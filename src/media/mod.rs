// SPDX-License-Identifier: MPL-2.0
//! Video entries and the playback backend seam.
//!
//! The player never decodes media itself: it drives a [`MediaBackend`]
//! through a [`MediaElement`] and reacts to the [`MediaEvent`]s it reports.

pub mod backend;
pub mod clock;
pub mod probe;

pub use backend::{MediaBackend, MediaElement, MediaEvent, PlaybackProps, ResizeMode};
pub use clock::ClockBackend;

use serde::{Deserialize, Serialize};

/// One entry of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl VideoItem {
    #[must_use]
    pub fn source(&self) -> VideoSource {
        VideoSource::new(self.uri.clone())
    }

    /// Description, if present and not blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}

/// Where the media element loads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoSource {
    pub uri: String,
}

impl VideoSource {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}
