// src/library/mod.rs
//! Library module - tracks, the playback queue, playlists, and history.

pub mod history;
pub mod playlist;
pub mod queue;
pub mod track;

// Re-export commonly used types
pub use history::History;
pub use playlist::{Playlist, PlaylistStore};
pub use queue::{Queue, RepeatMode};
pub use track::{classify_media, MediaKind, Track};
