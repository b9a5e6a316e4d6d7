// src/library/track.rs
//! Track model and media-kind classification.

use std::{fmt, path::Path, path::PathBuf};

use anyhow::Result;
use infer::{Infer, MatcherType};
use mime_guess::MimeGuess;

/// Media kind for a playable item.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MediaKind {
    Audio,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "Audio"),
            MediaKind::Video => write!(f, "Video"),
        }
    }
}

/// One playable media item. Owned by the queue or a playlist; history
/// references tracks by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u64,
    pub name: String,
    pub path: PathBuf,
    pub kind: MediaKind,
    /// Known duration in seconds, filled in by the metadata loader.
    pub duration_secs: Option<u64>,
}

impl Track {
    pub fn new(id: u64, path: PathBuf, kind: MediaKind) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id,
            name,
            path,
            kind,
            duration_secs: None,
        }
    }
}

/// Classify a file as audio or video. Returns `None` for anything else.
///
/// Magic-number sniffing first, extension-based lookup as fallback.
pub fn classify_media(path: &Path) -> Result<Option<MediaKind>> {
    if let Some(found) = Infer::new().get_from_path(path)? {
        return Ok(match found.matcher_type() {
            MatcherType::Audio => Some(MediaKind::Audio),
            MatcherType::Video => Some(MediaKind::Video),
            _ => None,
        });
    }

    let mime = MimeGuess::from_path(path).first_or_octet_stream();
    Ok(match mime.type_().as_str() {
        "audio" => Some(MediaKind::Audio),
        "video" => Some(MediaKind::Video),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_name_comes_from_file_stem() {
        let t = Track::new(1, PathBuf::from("/music/song.mp3"), MediaKind::Audio);
        assert_eq!(t.name, "song");
    }

    #[test]
    fn extension_lookup_recognizes_common_media() {
        let audio = MimeGuess::from_path(Path::new("x.mp3")).first_or_octet_stream();
        assert_eq!(audio.type_().as_str(), "audio");
        let video = MimeGuess::from_path(Path::new("x.mp4")).first_or_octet_stream();
        assert_eq!(video.type_().as_str(), "video");
    }
}
