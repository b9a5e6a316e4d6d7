// src/library/playlist.rs
//! User playlists. Each playlist owns its track sequence; loading one into
//! the queue copies the tracks rather than sharing them.

use std::collections::HashMap;

use super::track::Track;

#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<u64, Playlist>,
    next_id: u64,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.playlists.insert(
            id,
            Playlist {
                id,
                name: name.to_string(),
                tracks: Vec::new(),
            },
        );
        id
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.playlists.remove(&id).is_some()
    }

    pub fn get(&self, id: u64) -> Option<&Playlist> {
        self.playlists.get(&id)
    }

    pub fn add_track(&mut self, id: u64, track: Track) -> bool {
        match self.playlists.get_mut(&id) {
            Some(p) => {
                p.tracks.push(track);
                true
            }
            None => false,
        }
    }

    /// Copy of a playlist's tracks, suitable for loading into the queue.
    pub fn tracks_for_queue(&self, id: u64) -> Option<Vec<Track>> {
        self.playlists.get(&id).map(|p| p.tracks.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
