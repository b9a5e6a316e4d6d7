// src/library/queue.rs
//! The active playback queue: an ordered track list plus a current-index
//! pointer. Mutated wholesale (open files / load playlist); individual
//! entries are never edited in place.

use super::track::Track;

/// What happens when advancing past the last track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    Off,
    All,
}

impl RepeatMode {
    pub fn toggle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

#[derive(Debug, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue. Selection resets to the first track when
    /// the new sequence is non-empty.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.current = if tracks.is_empty() { None } else { Some(0) };
        self.tracks = tracks;
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = None;
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Jump straight to a track. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index < self.tracks.len() {
            self.current = Some(index);
            self.current_track()
        } else {
            None
        }
    }

    /// Advance to the next track. With repeat off, advancing past the end
    /// stops playback and leaves the index where it was.
    pub fn advance(&mut self, repeat: RepeatMode) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(_) => match repeat {
                RepeatMode::All => 0,
                RepeatMode::Off => return None,
            },
        };
        self.current = Some(next);
        self.current_track()
    }

    /// Step back to the previous track, wrapping to the end.
    pub fn previous(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        let prev = match self.current {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        };
        self.current = Some(prev);
        self.current_track()
    }

    pub fn fill_duration(&mut self, track_id: u64, secs: u64) {
        if let Some(t) = self.tracks.iter_mut().find(|t| t.id == track_id) {
            t.duration_secs = Some(secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::track::MediaKind;
    use std::path::PathBuf;

    fn track(id: u64) -> Track {
        Track::new(id, PathBuf::from(format!("{id}.mp3")), MediaKind::Audio)
    }

    #[test]
    fn replace_selects_first_track() {
        let mut q = Queue::new();
        q.replace(vec![track(1), track(2)]);
        assert_eq!(q.current_index(), Some(0));
        q.replace(vec![]);
        assert_eq!(q.current_index(), None);
    }

    #[test]
    fn advance_without_repeat_stops_at_end() {
        let mut q = Queue::new();
        q.replace(vec![track(1), track(2)]);
        assert_eq!(q.advance(RepeatMode::Off).map(|t| t.id), Some(2));
        assert_eq!(q.current_index(), Some(1));
        // At the end: stop, index unchanged.
        assert!(q.advance(RepeatMode::Off).is_none());
        assert_eq!(q.current_index(), Some(1));
    }

    #[test]
    fn advance_with_repeat_wraps() {
        let mut q = Queue::new();
        q.replace(vec![track(1), track(2)]);
        q.advance(RepeatMode::All);
        assert_eq!(q.advance(RepeatMode::All).map(|t| t.id), Some(1));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut q = Queue::new();
        q.replace(vec![track(1), track(2), track(3)]);
        assert_eq!(q.previous().map(|t| t.id), Some(3));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut q = Queue::new();
        q.replace(vec![track(1)]);
        assert!(q.select(5).is_none());
        assert_eq!(q.current_index(), Some(0));
    }
}
