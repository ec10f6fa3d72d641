// SPDX-License-Identifier: MPL-2.0
//! Playlist resolution from the command line.
//!
//! Inputs ending in `.toml` are playlist files with `[[videos]]` tables;
//! anything else is a media file that becomes a single entry. Without inputs
//! the loader falls back to `playlist.toml` in the config directory.
//!
//! ```toml
//! [[videos]]
//! id = "intro"
//! title = "Introduction"
//! uri = "/videos/intro.mp4"
//! description = "Optional"
//! tags = ["tutorial"]
//! ```

use super::paths;
use crate::error::{Error, Result};
use crate::media::VideoItem;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Playlist file looked up in the config directory.
pub const DEFAULT_PLAYLIST_FILE: &str = "playlist.toml";

#[derive(Debug, Default, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    videos: Vec<VideoItem>,
}

/// Parses playlist TOML. Blank and duplicate ids are rejected.
pub fn parse(content: &str) -> Result<Vec<VideoItem>> {
    let file: PlaylistFile = toml::from_str(content)?;
    check_unique_ids(&file.videos)?;
    Ok(file.videos)
}

pub fn load_from_path(path: &Path) -> Result<Vec<VideoItem>> {
    let content = fs::read_to_string(path)
        .map_err(|error| Error::Playlist(format!("{}: {}", path.display(), error)))?;
    parse(&content)
}

/// Builds an entry for a media file given on the command line.
///
/// The path doubles as the id; the file stem becomes the title.
#[must_use]
pub fn item_from_file(path: &Path) -> VideoItem {
    let uri = path.to_string_lossy().into_owned();
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| uri.clone());

    VideoItem {
        id: uri.clone(),
        title,
        uri,
        description: None,
        tags: Vec::new(),
    }
}

fn is_playlist_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Resolves the command line inputs into one playlist.
pub fn from_inputs(inputs: &[PathBuf]) -> Result<Vec<VideoItem>> {
    from_inputs_with_override(inputs, None)
}

pub fn from_inputs_with_override(
    inputs: &[PathBuf],
    config_dir: Option<PathBuf>,
) -> Result<Vec<VideoItem>> {
    if inputs.is_empty() {
        return match paths::get_app_config_dir_with_override(config_dir)
            .map(|dir| dir.join(DEFAULT_PLAYLIST_FILE))
            .filter(|path| path.exists())
        {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading default playlist");
                load_from_path(&path)
            }
            None => Ok(Vec::new()),
        };
    }

    let mut videos = Vec::new();
    for input in inputs {
        if is_playlist_file(input) {
            videos.extend(load_from_path(input)?);
        } else {
            videos.push(item_from_file(input));
        }
    }
    check_unique_ids(&videos)?;
    Ok(videos)
}

fn check_unique_ids(videos: &[VideoItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for video in videos {
        if video.id.trim().is_empty() {
            return Err(Error::Playlist(format!("entry '{}' has an empty id", video.title)));
        }
        if !seen.insert(video.id.as_str()) {
            return Err(Error::Playlist(format!("duplicate id '{}'", video.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[videos]]
id = "a"
title = "First"
uri = "file:///tmp/a.mp4"
description = "Opening clip"
tags = ["intro", "demo"]

[[videos]]
id = "b"
title = "Second"
uri = "https://example.com/b.mp4"
"#;

    #[test]
    fn parse_reads_entries_in_order() {
        let videos = parse(SAMPLE).expect("sample should parse");
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "a");
        assert_eq!(videos[0].description(), Some("Opening clip"));
        assert_eq!(videos[0].tags, vec!["intro", "demo"]);
        assert_eq!(videos[1].title, "Second");
        assert_eq!(videos[1].description, None);
        assert!(videos[1].tags.is_empty());
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let content = r#"
[[videos]]
id = "a"
title = "One"
uri = "one.mp4"

[[videos]]
id = "a"
title = "Two"
uri = "two.mp4"
"#;
        match parse(content) {
            Err(Error::Playlist(message)) => assert!(message.contains("'a'")),
            other => panic!("expected playlist error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_blank_ids() {
        let content = r#"
[[videos]]
id = ""
title = "Nameless"
uri = "nameless.mp4"
"#;
        match parse(content) {
            Err(Error::Playlist(message)) => assert!(message.contains("empty id")),
            other => panic!("expected playlist error, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_document_yields_empty_playlist() {
        assert!(parse("").expect("empty should parse").is_empty());
    }

    #[test]
    fn parse_reports_missing_fields_as_config_error() {
        let content = r#"
[[videos]]
id = "a"
"#;
        assert!(matches!(parse(content), Err(Error::Config(_))));
    }

    #[test]
    fn item_from_file_uses_stem_as_title() {
        let item = item_from_file(Path::new("/media/holiday.mp4"));
        assert_eq!(item.title, "holiday");
        assert_eq!(item.id, "/media/holiday.mp4");
        assert_eq!(item.uri, "/media/holiday.mp4");
    }

    #[test]
    fn inputs_mix_playlists_and_files() {
        let dir = tempdir().expect("temp dir");
        let playlist = dir.path().join("list.toml");
        fs::write(&playlist, SAMPLE).expect("write playlist");

        let inputs = vec![playlist, PathBuf::from("/media/extra.mp4")];
        let videos = from_inputs(&inputs).expect("inputs should resolve");
        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "/media/extra.mp4"]);
    }

    #[test]
    fn repeated_file_inputs_are_duplicates() {
        let inputs = vec![PathBuf::from("x.mp4"), PathBuf::from("x.mp4")];
        assert!(matches!(from_inputs(&inputs), Err(Error::Playlist(_))));
    }

    #[test]
    fn missing_playlist_file_is_playlist_error() {
        let dir = tempdir().expect("temp dir");
        let inputs = vec![dir.path().join("absent.toml")];
        assert!(matches!(from_inputs(&inputs), Err(Error::Playlist(_))));
    }

    #[test]
    fn no_inputs_loads_default_playlist_from_config_dir() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(DEFAULT_PLAYLIST_FILE), SAMPLE).expect("write playlist");

        let videos = from_inputs_with_override(&[], Some(dir.path().to_path_buf()))
            .expect("default playlist should load");
        assert_eq!(videos.len(), 2);
    }

    #[test]
    fn no_inputs_and_no_default_playlist_is_empty() {
        let dir = tempdir().expect("temp dir");
        let videos = from_inputs_with_override(&[], Some(dir.path().to_path_buf()))
            .expect("missing default is not an error");
        assert!(videos.is_empty());
    }
}
