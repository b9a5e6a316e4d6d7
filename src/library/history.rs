// src/library/history.rs
//! Bounded play history: most-recent-first, capacity 50, deduplicated only
//! against the current head entry.

use std::collections::VecDeque;

const CAPACITY: usize = 50;

#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<u64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a played track. A repeat of the current head is ignored;
    /// anything beyond capacity evicts the oldest entry.
    pub fn push(&mut self, track_id: u64) {
        if self.entries.front() == Some(&track_id) {
            return;
        }
        self.entries.push_front(track_id);
        while self.entries.len() > CAPACITY {
            self.entries.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most-recent-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().copied()
    }
}
