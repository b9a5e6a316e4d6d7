use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use retrodeck::app::App;
use retrodeck::audio::eq::{Equalizer, FilterChain, BAND_FREQUENCIES, CUSTOM_LABEL};
use retrodeck::audio::fallback::{ErrorKind, AUTO_SKIP_DELAY};
use retrodeck::audio::{AudioGraph, GraphState};
use retrodeck::library::{MediaKind, RepeatMode, Track};

fn tracks(n: u64) -> Vec<Track> {
    (0..n)
        .map(|i| Track::new(i, PathBuf::from(format!("track-{i}.mp3")), MediaKind::Audio))
        .collect()
}

fn equalizer() -> Equalizer {
    let chain = Arc::new(Mutex::new(FilterChain::build(&BAND_FREQUENCIES, 44_100.0)));
    Equalizer::new(chain)
}

#[test]
fn rock_preset_then_manual_edit_goes_custom() {
    let mut eq = equalizer();
    eq.apply_preset("Rock");
    assert_eq!(eq.label(), "Rock");
    eq.set_band(4, 7.0);
    assert_eq!(
        eq.gains(),
        &[5.0, 4.0, 3.0, 1.0, 7.0, -1.0, 1.0, 3.0, 4.0, 5.0]
    );
    assert_eq!(eq.label(), CUSTOM_LABEL);
}

#[test]
fn flat_preset_resets_every_band() {
    let mut eq = equalizer();
    eq.apply_preset("Metal");
    eq.apply_preset("Flat");
    assert_eq!(eq.gains(), &[0.0; 10]);
}

#[test]
fn queue_advance_respects_repeat_policy() {
    let mut app = App::from_tracks(tracks(2));
    assert_eq!(app.queue.current_index(), Some(0));

    app.advance_to_next();
    assert_eq!(app.queue.current_index(), Some(1));

    // Repeat off at the end of the queue: playback stops, index stays.
    app.advance_to_next();
    assert_eq!(app.queue.current_index(), Some(1));

    // Repeat all wraps around instead.
    app.repeat = RepeatMode::All;
    app.advance_to_next();
    assert_eq!(app.queue.current_index(), Some(0));
}

#[test]
fn errored_middle_track_skips_to_the_next() {
    let mut app = App::from_tracks(tracks(3));
    app.queue.select(1);
    app.fallback
        .trip(1, ErrorKind::DecodeError, "corrupt stream".into(), 3);
    assert!(app.fallback.is_errored());

    app.auto_skip_check(Instant::now() + AUTO_SKIP_DELAY + Duration::from_millis(1));
    assert_eq!(app.queue.current_index(), Some(2));
    assert!(!app.fallback.is_errored());
}

#[test]
fn history_stays_bounded_across_many_plays() {
    let mut app = App::from_tracks(tracks(60));
    for i in 0..60 {
        app.queue.select(i);
        app.play_current();
    }
    assert_eq!(app.history.len(), 50);
}

#[test]
fn binding_twice_keeps_a_single_graph() {
    let mut graph = AudioGraph::new();
    assert_eq!(graph.bind(44_100.0), GraphState::Bound);
    let chain = graph.wiring().unwrap().chain;
    assert_eq!(graph.bind(44_100.0), GraphState::Bound);
    assert!(Arc::ptr_eq(&chain, &graph.wiring().unwrap().chain));
}

#[test]
fn playlist_load_copies_into_the_queue() {
    let mut app = App::from_tracks(tracks(2));
    let id = app.playlists.create("mix");
    for t in tracks(3) {
        app.playlists.add_track(id, t);
    }

    let copy = app.playlists.tracks_for_queue(id).unwrap();
    app.queue.replace(copy);
    assert_eq!(app.queue.len(), 3);
    assert_eq!(app.queue.current_index(), Some(0));
    // The playlist still owns its own sequence.
    assert_eq!(app.playlists.get(id).unwrap().tracks.len(), 3);
}
