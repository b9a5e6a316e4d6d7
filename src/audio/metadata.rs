// src/audio/metadata.rs
//! Track metadata extraction using Lofty.

use std::path::PathBuf;

use anyhow::Result;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::ItemKey;

/// Metadata filled in after a track starts loading.
#[derive(Debug, Clone)]
pub struct TrackMetadata {
    pub track_id: u64,
    /// Tagged title, if the file carries one.
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Total track length in seconds.
    pub duration_secs: u64,
}

/// Probe a file for title, artist, and duration. Safe to call from a
/// background thread; failures just leave the UI with the filename.
pub fn load_metadata(track_id: u64, path: PathBuf) -> Result<TrackMetadata> {
    let tagged_file = Probe::open(&path)?.read()?;

    let title = tagged_file
        .primary_tag()
        .and_then(|tag| tag.get_string(&ItemKey::TrackTitle).map(str::to_string));
    let artist = tagged_file
        .primary_tag()
        .and_then(|tag| tag.get_string(&ItemKey::TrackArtist).map(str::to_string));
    let duration_secs = tagged_file.properties().duration().as_secs();

    Ok(TrackMetadata {
        track_id,
        title,
        artist,
        duration_secs,
    })
}
