// src/audio/fallback.rs
//! Playback error classification and the auto-skip fallback state machine.
//!
//! A failed track puts the surface into `Errored`: the visualizer pane is
//! replaced by an overlay and, when the queue has somewhere to go, a single
//! 3-second deadline arms that advances to the next track exactly once.
//! Loading any new track cancels the deadline and reverts to `Normal`.

use std::io;
use std::time::{Duration, Instant};

use rodio::decoder::DecoderError;

/// Seconds an errored track stays on screen before auto-skipping.
pub const AUTO_SKIP_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    DecodeError,
    NetworkError,
    Aborted,
}

impl ErrorKind {
    pub fn headline(self) -> &'static str {
        match self {
            ErrorKind::UnsupportedFormat => "Format not supported",
            ErrorKind::DecodeError => "Playback failed",
            ErrorKind::NetworkError => "Media unavailable",
            ErrorKind::Aborted => "Playback aborted",
        }
    }
}

pub fn classify_decoder_error(err: &DecoderError) -> ErrorKind {
    match err {
        DecoderError::UnrecognizedFormat => ErrorKind::UnsupportedFormat,
        DecoderError::IoError(_) => ErrorKind::NetworkError,
        DecoderError::DecodeError(_) | DecoderError::LimitError(_) => ErrorKind::DecodeError,
        _ => ErrorKind::Aborted,
    }
}

pub fn classify_io_error(_err: &io::Error) -> ErrorKind {
    // The media handle went away underneath us; same recovery path as a
    // network failure.
    ErrorKind::NetworkError
}

/// Per-track fallback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackState {
    Normal,
    Errored {
        track_id: u64,
        kind: ErrorKind,
        message: String,
        /// When to auto-skip. `None` when the queue has nowhere to go.
        deadline: Option<Instant>,
    },
}

impl FallbackState {
    pub fn new() -> Self {
        FallbackState::Normal
    }

    /// Enter `Errored`. The skip deadline only arms when the queue holds
    /// more than one track.
    pub fn trip(&mut self, track_id: u64, kind: ErrorKind, message: String, queue_len: usize) {
        let deadline = (queue_len > 1).then(|| Instant::now() + AUTO_SKIP_DELAY);
        *self = FallbackState::Errored {
            track_id,
            kind,
            message,
            deadline,
        };
    }

    /// A new track loaded: cancel any pending skip and clear the overlay.
    pub fn reset(&mut self) {
        *self = FallbackState::Normal;
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, FallbackState::Errored { .. })
    }

    /// True exactly once, when the armed deadline has passed. Disarms the
    /// deadline so the advance fires a single time.
    pub fn take_expired_skip(&mut self, now: Instant) -> bool {
        if let FallbackState::Errored { deadline, .. } = self {
            if deadline.is_some_and(|d| now >= d) {
                *deadline = None;
                return true;
            }
        }
        false
    }
}

impl Default for FallbackState {
    fn default() -> Self {
        Self::new()
    }
}
