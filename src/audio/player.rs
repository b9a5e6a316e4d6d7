// src/audio/player.rs
//! Playback engine: a dedicated thread owning the rodio output, driven by
//! transport commands, reporting decode errors and end-of-track events
//! back to the UI thread.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::fallback::{classify_decoder_error, classify_io_error, ErrorKind};
use super::graph::GraphWiring;
use super::tap::ProcessedSource;

/// Transport commands sent to the audio thread.
enum PlayerCommand {
    Play { track_id: u64, path: PathBuf },
    Pause,
    Resume,
    Stop,
    SeekBy(i64),
    SetVolume(f32),
}

/// Events the audio thread reports back.
pub enum PlayerEvent {
    /// The track could not be opened or decoded.
    Error {
        track_id: u64,
        kind: ErrorKind,
        message: String,
    },
    /// The track played to its natural end.
    Finished { track_id: u64 },
}

/// Handle held by the UI thread. Commands return immediately; state flags
/// are mirrored through atomics for cheap per-frame reads.
pub struct Player {
    cmd_tx: Sender<PlayerCommand>,
    event_rx: Receiver<PlayerEvent>,
    is_playing_flag: Arc<AtomicBool>,
    is_paused_flag: Arc<AtomicBool>,
    volume: f32,
}

impl Player {
    /// Spawn the audio thread. `wiring` is the bound graph's chain and
    /// tap; `None` (graph Failed) plays sources unprocessed — degraded but
    /// functional.
    pub fn new(wiring: Option<GraphWiring>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<PlayerCommand>();
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

        let is_playing_flag = Arc::new(AtomicBool::new(false));
        let is_paused_flag = Arc::new(AtomicBool::new(false));

        let playing = is_playing_flag.clone();
        let paused = is_paused_flag.clone();

        thread::spawn(move || {
            audio_thread(cmd_rx, event_tx, wiring, playing, paused);
        });

        Self {
            cmd_tx,
            event_rx,
            is_playing_flag,
            is_paused_flag,
            volume: 1.0,
        }
    }

    pub fn play(&mut self, track_id: u64, path: &PathBuf) -> Result<()> {
        self.cmd_tx
            .send(PlayerCommand::Play {
                track_id,
                path: path.clone(),
            })
            .ok();
        Ok(())
    }

    pub fn pause(&mut self) {
        let _ = self.cmd_tx.send(PlayerCommand::Pause);
    }

    pub fn resume(&mut self) {
        let _ = self.cmd_tx.send(PlayerCommand::Resume);
    }

    pub fn stop(&mut self) {
        let _ = self.cmd_tx.send(PlayerCommand::Stop);
    }

    /// Seek relative to the current position, in whole seconds.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let _ = self.cmd_tx.send(PlayerCommand::SeekBy(delta_secs));
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 2.0);
        let _ = self.cmd_tx.send(PlayerCommand::SetVolume(self.volume));
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Drain pending events without blocking.
    pub fn poll_events(&self) -> Vec<PlayerEvent> {
        self.event_rx.try_iter().collect()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing_flag.load(Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused_flag.load(Ordering::SeqCst)
    }
}

fn audio_thread(
    cmd_rx: Receiver<PlayerCommand>,
    event_tx: Sender<PlayerEvent>,
    wiring: Option<GraphWiring>,
    playing: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
) {
    let Ok((stream, handle)) = OutputStream::try_default() else {
        // No audio output at all: drain commands until the sender drops.
        while cmd_rx.recv().is_ok() {}
        return;
    };

    let mut sink: Option<Sink> = None;
    let mut current_track: Option<u64> = None;
    let mut volume = 1.0f32;

    loop {
        // Short timeout so end-of-track is noticed promptly.
        let cmd = match cmd_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(cmd) => Some(cmd),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        match cmd {
            Some(PlayerCommand::Play { track_id, path }) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                // Stale samples from the previous track would bleed into
                // the first frames of the new one.
                if let Some(w) = &wiring {
                    if let Ok(mut buf) = w.tap.lock() {
                        use ringbuf::traits::*;
                        buf.clear();
                    }
                }
                current_track = None;

                match start_track(&handle, &path, &wiring, volume) {
                    Ok(new_sink) => {
                        playing.store(true, Ordering::SeqCst);
                        paused.store(false, Ordering::SeqCst);
                        sink = Some(new_sink);
                        current_track = Some(track_id);
                    }
                    Err((kind, message)) => {
                        playing.store(false, Ordering::SeqCst);
                        paused.store(false, Ordering::SeqCst);
                        let _ = event_tx.send(PlayerEvent::Error {
                            track_id,
                            kind,
                            message,
                        });
                    }
                }
            }
            Some(PlayerCommand::Pause) => {
                if let Some(s) = &sink {
                    s.pause();
                    paused.store(true, Ordering::SeqCst);
                }
            }
            Some(PlayerCommand::Resume) => {
                if let Some(s) = &sink {
                    s.play();
                    paused.store(false, Ordering::SeqCst);
                }
            }
            Some(PlayerCommand::Stop) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                current_track = None;
                playing.store(false, Ordering::SeqCst);
                paused.store(false, Ordering::SeqCst);
            }
            Some(PlayerCommand::SeekBy(delta)) => {
                if let Some(s) = &sink {
                    let pos = s.get_pos().as_secs() as i64;
                    let target = (pos + delta).max(0) as u64;
                    let _ = s.try_seek(Duration::from_secs(target));
                }
            }
            Some(PlayerCommand::SetVolume(v)) => {
                volume = v;
                if let Some(s) = &sink {
                    s.set_volume(v);
                }
            }
            None => {}
        }

        // End-of-track: the sink drained on its own.
        if let (Some(s), Some(track_id)) = (&sink, current_track) {
            if s.empty() {
                sink = None;
                current_track = None;
                playing.store(false, Ordering::SeqCst);
                paused.store(false, Ordering::SeqCst);
                let _ = event_tx.send(PlayerEvent::Finished { track_id });
            }
        }
    }

    if let Some(s) = sink.take() {
        s.stop();
    }
    drop(stream);
}

/// Open, decode, wrap through the graph, and start a sink for one track.
fn start_track(
    handle: &rodio::OutputStreamHandle,
    path: &PathBuf,
    wiring: &Option<GraphWiring>,
    volume: f32,
) -> Result<Sink, (ErrorKind, String)> {
    let file = File::open(path).map_err(|e| (classify_io_error(&e), e.to_string()))?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| (classify_decoder_error(&e), e.to_string()))?;

    let sink = Sink::try_new(handle).map_err(|e| (ErrorKind::Aborted, e.to_string()))?;
    sink.set_volume(volume);

    let converted = source.convert_samples::<f32>();
    match wiring {
        Some(w) => {
            sink.append(ProcessedSource::new(
                converted,
                w.chain.clone(),
                w.tap.clone(),
            ));
        }
        None => sink.append(converted),
    }
    sink.play();
    Ok(sink)
}
