// src/app/state.rs
//! Application state management.

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Instant,
};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{widgets::ListState, Frame};

use crate::{
    audio::{
        fallback::FallbackState, load_metadata, AudioGraph, Equalizer, Player, PlayerEvent,
        TrackMetadata, Visualizer,
    },
    library::{classify_media, History, PlaylistStore, Queue, RepeatMode, Track},
    theme::ThemeId,
    ui::{
        keybindings::{key_to_action, Action},
        layout::{compute_layout, SectionVisibility},
        widgets::{
            render_equalizer, render_error_overlay, render_player_panel, render_queue_list,
            PlayerPanelState,
        },
    },
};

/// EQ slider step per keypress, in dB.
const BAND_STEP_DB: f32 = 1.0;
/// Seek step per keypress, in seconds.
const SEEK_STEP_SECS: i64 = 5;
const VOLUME_STEP: f32 = 0.1;

/// Main application state.
pub struct App {
    /// Active playback queue
    pub queue: Queue,
    /// User playlists
    pub playlists: PlaylistStore,
    /// Bounded play history
    pub history: History,
    /// Queue list selection (cursor, not the playing track)
    pub selected: usize,
    list_state: ListState,
    /// Most recently created/used playlist, target of add/load actions
    last_playlist: Option<u64>,

    /// Audio graph: filter chain + analyzer, bound once for this surface
    pub graph: AudioGraph,
    /// Playback engine handle
    pub player: Player,
    /// 10-band equalizer controller
    pub equalizer: Equalizer,
    /// Spectrum/waveform visualizer state
    pub visualizer: Visualizer,
    /// Error/auto-skip fallback state
    pub fallback: FallbackState,

    pub theme: ThemeId,
    pub repeat: RepeatMode,
    /// Currently selected EQ band (cursor for +/- adjustments)
    pub selected_band: usize,

    /// Elapsed playback time in seconds
    pub elapsed: u64,
    /// Artist of the current track, from the metadata loader
    artist: Option<String>,

    /// Metadata channel (background loader -> UI)
    meta_tx: Sender<TrackMetadata>,
    meta_rx: Receiver<TrackMetadata>,

    /// Section visibility state
    pub visibility: SectionVisibility,
}

impl App {
    /// Build the app from media file paths (the external file-selection
    /// surface). Non-media paths are skipped.
    pub fn new(paths: Vec<PathBuf>) -> Result<Self> {
        let mut tracks = Vec::new();
        for (i, path) in paths.into_iter().enumerate() {
            if let Ok(Some(kind)) = classify_media(&path) {
                tracks.push(Track::new(i as u64, path, kind));
            }
        }
        Ok(Self::from_tracks(tracks))
    }

    /// Build the app from ready-made tracks. Binds the audio graph exactly
    /// once, before any playback or frame read.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut graph = AudioGraph::new();
        graph.bind(44_100.0);

        let player = Player::new(graph.wiring());
        let equalizer = Equalizer::new(
            graph
                .wiring()
                .map(|w| w.chain)
                .unwrap_or_else(|| {
                    // Graph Failed: the controller still tracks state, it
                    // just has no live cascade to push into.
                    std::sync::Arc::new(std::sync::Mutex::new(
                        crate::audio::eq::FilterChain::build(
                            &crate::audio::eq::BAND_FREQUENCIES,
                            44_100.0,
                        ),
                    ))
                }),
        );

        let mut queue = Queue::new();
        queue.replace(tracks);

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let (meta_tx, meta_rx) = std::sync::mpsc::channel::<TrackMetadata>();

        Self {
            queue,
            playlists: PlaylistStore::new(),
            history: History::new(),
            selected: 0,
            list_state,
            last_playlist: None,
            graph,
            player,
            equalizer,
            visualizer: Visualizer::new(),
            fallback: FallbackState::new(),
            theme: ThemeId::Amp,
            repeat: RepeatMode::Off,
            selected_band: 0,
            elapsed: 0,
            artist: None,
            meta_tx,
            meta_rx,
            visibility: SectionVisibility::default(),
        }
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            Action::ToggleSection(d) => self.visibility.toggle(d),
            Action::Down => {
                if self.selected + 1 < self.queue.len() {
                    self.selected += 1;
                }
            }
            Action::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            Action::PlaySelected => {
                if self.queue.select(self.selected).is_some() {
                    self.play_current();
                }
            }
            Action::TogglePause => {
                if self.player.is_paused() {
                    self.player.resume();
                } else {
                    self.player.pause();
                }
            }
            Action::Stop => {
                self.player.stop();
                self.elapsed = 0;
            }
            Action::NextTrack => self.advance_to_next(),
            Action::PreviousTrack => {
                if self.queue.previous().is_some() {
                    self.play_current();
                }
            }
            Action::SeekForward => self.player.seek_by(SEEK_STEP_SECS),
            Action::SeekBackward => self.player.seek_by(-SEEK_STEP_SECS),
            Action::VolumeUp => {
                let v = self.player.volume() + VOLUME_STEP;
                self.player.set_volume(v);
            }
            Action::VolumeDown => {
                let v = self.player.volume() - VOLUME_STEP;
                self.player.set_volume(v);
            }
            Action::CycleVisualization => self.visualizer.cycle_mode(),
            Action::ToggleVisualizer => self.visibility.visualizer = !self.visibility.visualizer,
            Action::CycleTheme => self.theme = self.theme.next(),
            Action::CyclePreset => self.equalizer.cycle_preset(),
            Action::ToggleRepeat => self.repeat = self.repeat.toggle(),
            Action::BandNext => {
                self.selected_band = (self.selected_band + 1) % crate::audio::eq::BAND_COUNT;
            }
            Action::BandPrevious => {
                self.selected_band = self
                    .selected_band
                    .checked_sub(1)
                    .unwrap_or(crate::audio::eq::BAND_COUNT - 1);
            }
            Action::BandGainUp => {
                self.equalizer.adjust_band(self.selected_band, BAND_STEP_DB);
            }
            Action::BandGainDown => {
                self.equalizer.adjust_band(self.selected_band, -BAND_STEP_DB);
            }
            Action::CreatePlaylist => {
                let name = format!("Playlist {}", self.playlists.len() + 1);
                self.last_playlist = Some(self.playlists.create(&name));
            }
            Action::AddToPlaylist => {
                if let (Some(id), Some(track)) =
                    (self.last_playlist, self.queue.tracks().get(self.selected))
                {
                    self.playlists.add_track(id, track.clone());
                }
            }
            Action::LoadPlaylist => {
                if let Some(tracks) = self
                    .last_playlist
                    .and_then(|id| self.playlists.tracks_for_queue(id))
                {
                    if !tracks.is_empty() {
                        self.queue.replace(tracks);
                        self.selected = 0;
                        self.play_current();
                    }
                }
            }
            Action::Quit => {
                self.player.stop();
                return true;
            }
            Action::None => {}
        }

        self.list_state.select(Some(self.selected));
        false
    }

    /// Start playing the queue's current track: clears any fallback state,
    /// records history, and kicks off the metadata loader.
    pub fn play_current(&mut self) {
        let Some(track) = self.queue.current_track() else {
            return;
        };
        let (id, path) = (track.id, track.path.clone());

        // A new track load cancels any pending auto-skip.
        self.fallback.reset();
        self.elapsed = 0;
        self.artist = None;

        if self.player.play(id, &path).is_ok() {
            self.history.push(id);

            let tx = self.meta_tx.clone();
            thread::spawn(move || {
                if let Ok(meta) = load_metadata(id, path) {
                    let _ = tx.send(meta);
                }
            });
        }
    }

    /// Advance per the repeat policy; with nowhere to go, playback stops
    /// and the index stays put.
    pub fn advance_to_next(&mut self) {
        if self.queue.advance(self.repeat).is_some() {
            if let Some(i) = self.queue.current_index() {
                self.selected = i;
                self.list_state.select(Some(i));
            }
            self.play_current();
        } else {
            self.player.stop();
        }
    }

    /// Per-tick bookkeeping: drain metadata and player events, then fire
    /// the auto-skip deadline if it has expired.
    pub fn tick(&mut self) {
        while let Ok(meta) = self.meta_rx.try_recv() {
            self.queue.fill_duration(meta.track_id, meta.duration_secs.max(1));
            if self.queue.current_track().map(|t| t.id) == Some(meta.track_id) {
                self.artist = meta.artist;
            }
        }

        for event in self.player.poll_events() {
            self.handle_player_event(event);
        }

        self.auto_skip_check(Instant::now());
    }

    /// Apply one playback event. The audio thread reports asynchronously,
    /// so events can arrive after the track they concern was replaced;
    /// anything not about the current track is stale and ignored — an old
    /// error must never arm a skip against a track that loaded after it.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Error {
                track_id,
                kind,
                message,
            } => {
                if self.queue.current_track().map(|t| t.id) == Some(track_id) {
                    self.fallback.trip(track_id, kind, message, self.queue.len());
                }
            }
            PlayerEvent::Finished { track_id } => {
                if self.queue.current_track().map(|t| t.id) == Some(track_id) {
                    self.advance_to_next();
                }
            }
        }
    }

    /// Fire the armed auto-skip deadline at most once.
    pub fn auto_skip_check(&mut self, now: Instant) {
        if self.fallback.take_expired_skip(now) {
            self.advance_to_next();
        }
    }

    /// Update elapsed time; called once per second while playing.
    pub fn tick_elapsed(&mut self) {
        if self.player.is_playing() && !self.player.is_paused() {
            let cap = self
                .queue
                .current_track()
                .and_then(|t| t.duration_secs)
                .unwrap_or(u64::MAX);
            self.elapsed = (self.elapsed + 1).min(cap);
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let area = f.area();
        let layout = compute_layout(area, &self.visibility);
        let palette = self.theme.palette();

        let mut col_index = 0usize;
        for section in layout.section_order.iter() {
            let Some(&column) = layout.columns.get(col_index) else {
                break;
            };
            match *section {
                "queue" => {
                    render_queue_list(
                        f,
                        column,
                        &self.queue,
                        self.playlists.len(),
                        &mut self.list_state,
                    );
                }
                "player" => {
                    let state = PlayerPanelState {
                        current: self.queue.current_track(),
                        artist: self.artist.as_deref(),
                        elapsed: self.elapsed,
                        is_playing: self.player.is_playing(),
                        is_paused: self.player.is_paused(),
                        volume: self.player.volume(),
                        repeat: self.repeat,
                        theme_name: palette.name,
                        history: &self.history,
                        queue: &self.queue,
                        graph_error: self.graph.bind_error(),
                    };
                    render_player_panel(f, column, &state);
                }
                "equalizer" => {
                    render_equalizer(f, column, &self.equalizer, self.selected_band);
                }
                _ => {}
            }
            col_index += 1;
        }

        // Bottom pane: fallback overlay while errored, visualizer otherwise.
        if let Some(visualizer_area) = layout.visualizer_area {
            if self.fallback.is_errored() {
                render_error_overlay(f, visualizer_area, &self.fallback);
            } else {
                self.visualizer
                    .render(f, visualizer_area, self.graph.analyzer_mut(), &palette);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fallback::{ErrorKind, AUTO_SKIP_DELAY};
    use crate::library::MediaKind;
    use std::time::Duration;

    fn tracks(n: u64) -> Vec<Track> {
        (0..n)
            .map(|i| Track::new(i, PathBuf::from(format!("{i}.mp3")), MediaKind::Audio))
            .collect()
    }

    #[test]
    fn errored_track_auto_skips_and_clears_overlay() {
        let mut app = App::from_tracks(tracks(3));
        app.queue.select(1);
        app.fallback
            .trip(1, ErrorKind::DecodeError, "bad".into(), app.queue.len());
        assert!(app.fallback.is_errored());

        // Before the deadline: nothing moves.
        app.auto_skip_check(Instant::now());
        assert_eq!(app.queue.current_index(), Some(1));

        app.auto_skip_check(Instant::now() + AUTO_SKIP_DELAY + Duration::from_millis(1));
        assert_eq!(app.queue.current_index(), Some(2));
        assert!(!app.fallback.is_errored());
    }

    #[test]
    fn single_track_error_never_skips() {
        let mut app = App::from_tracks(tracks(1));
        app.fallback
            .trip(0, ErrorKind::UnsupportedFormat, "x".into(), app.queue.len());
        app.auto_skip_check(Instant::now() + AUTO_SKIP_DELAY * 2);
        assert_eq!(app.queue.current_index(), Some(0));
        assert!(app.fallback.is_errored());
    }

    #[test]
    fn new_track_cancels_pending_skip() {
        let mut app = App::from_tracks(tracks(3));
        app.fallback
            .trip(0, ErrorKind::NetworkError, "x".into(), app.queue.len());
        app.queue.select(2);
        app.play_current();
        assert!(!app.fallback.is_errored());
        app.auto_skip_check(Instant::now() + AUTO_SKIP_DELAY * 2);
        assert_eq!(app.queue.current_index(), Some(2));
    }

    #[test]
    fn stale_error_event_never_trips_the_fallback() {
        let mut app = App::from_tracks(tracks(3));
        app.play_current();
        // Track 1 loads before the failure report for track 0 drains.
        app.queue.select(1);
        app.play_current();

        app.handle_player_event(PlayerEvent::Error {
            track_id: 0,
            kind: ErrorKind::DecodeError,
            message: "late failure".into(),
        });
        assert!(!app.fallback.is_errored());
        app.auto_skip_check(Instant::now() + AUTO_SKIP_DELAY * 2);
        assert_eq!(app.queue.current_index(), Some(1));

        // An error for the current track still trips it.
        app.handle_player_event(PlayerEvent::Error {
            track_id: 1,
            kind: ErrorKind::DecodeError,
            message: "current failure".into(),
        });
        assert!(app.fallback.is_errored());
    }

    #[test]
    fn advance_with_repeat_off_stops_at_the_end() {
        let mut app = App::from_tracks(tracks(2));
        app.advance_to_next();
        assert_eq!(app.queue.current_index(), Some(1));
        app.advance_to_next();
        // End of queue: index stays, nothing plays.
        assert_eq!(app.queue.current_index(), Some(1));
    }

    #[test]
    fn playing_records_history_without_consecutive_duplicates() {
        let mut app = App::from_tracks(tracks(2));
        app.play_current();
        app.play_current();
        assert_eq!(app.history.len(), 1);
        app.queue.select(1);
        app.play_current();
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn graph_binds_once_for_the_surface() {
        let mut app = App::from_tracks(tracks(1));
        assert_eq!(app.graph.state(), crate::audio::GraphState::Bound);
        let before = app.graph.wiring().unwrap();
        app.graph.bind(48_000.0);
        assert!(std::sync::Arc::ptr_eq(
            &before.chain,
            &app.graph.wiring().unwrap().chain
        ));
    }
}
