// src/audio/analyzer.rs
//! Spectrum analyzer adapter: on-demand frequency- and time-domain
//! snapshots over the shared sample tap.

use std::sync::{Arc, Mutex};

use ringbuf::{traits::*, HeapRb};
use rustfft::{num_complex::Complex, FftPlanner};

/// Fixed analysis window in samples.
pub const WINDOW_SIZE: usize = 512;
/// Frequency bins per frame (half the window, real-input symmetry).
pub const BIN_COUNT: usize = WINDOW_SIZE / 2;

/// dBFS range mapped onto the 0..=255 magnitude bytes.
const MIN_DB: f32 = -100.0;
const MAX_DB: f32 = -30.0;

/// Reads the tap buffer and produces byte-valued analysis frames. Pure
/// reads: safe to call every frame, never consumes samples.
pub struct SpectrumAnalyzer {
    buffer: Arc<Mutex<HeapRb<f32>>>,
    fft_planner: FftPlanner<f32>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer: Arc<Mutex<HeapRb<f32>>>) -> Self {
        Self {
            buffer,
            fft_planner: FftPlanner::new(),
        }
    }

    /// Newest window of raw samples, or `None` when the tap holds less
    /// than a full window.
    fn window(&self) -> Option<[f32; WINDOW_SIZE]> {
        let buf = self.buffer.lock().ok()?;
        let available = buf.occupied_len();
        if available < WINDOW_SIZE {
            return None;
        }
        let mut out = [0.0f32; WINDOW_SIZE];
        let start = available - WINDOW_SIZE;
        for (slot, sample) in out.iter_mut().zip(buf.iter().skip(start)) {
            *slot = *sample;
        }
        Some(out)
    }

    /// Per-bin magnitude bytes (0..=255). Zeroed when no window is
    /// available yet; callers are expected to tolerate that.
    pub fn frequency_frame(&mut self) -> [u8; BIN_COUNT] {
        let Some(samples) = self.window() else {
            return [0; BIN_COUNT];
        };

        // Hann window to reduce spectral leakage.
        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                let w = 0.5
                    * (1.0
                        - (2.0 * std::f32::consts::PI * i as f32 / WINDOW_SIZE as f32).cos());
                Complex::new(sample * w, 0.0)
            })
            .collect();

        let fft = self.fft_planner.plan_fft_forward(WINDOW_SIZE);
        fft.process(&mut buffer);

        let scale = 1.0 / WINDOW_SIZE as f32;
        let mut frame = [0u8; BIN_COUNT];
        for (out, c) in frame.iter_mut().zip(buffer.iter()) {
            let mag = (c.re * c.re + c.im * c.im).sqrt() * scale;
            let db = 20.0 * mag.max(1e-10).log10();
            let normalized = ((db - MIN_DB) / (MAX_DB - MIN_DB)).clamp(0.0, 1.0);
            *out = (normalized * 255.0) as u8;
        }
        frame
    }

    /// Raw waveform bytes: [-1, 1] mapped to 0..=255, 128 = silence.
    /// Flat 128s when no window is available yet.
    pub fn time_frame(&self) -> [u8; WINDOW_SIZE] {
        let Some(samples) = self.window() else {
            return [128; WINDOW_SIZE];
        };
        let mut frame = [128u8; WINDOW_SIZE];
        for (out, &s) in frame.iter_mut().zip(samples.iter()) {
            *out = (s.clamp(-1.0, 1.0) * 127.5 + 128.0).min(255.0) as u8;
        }
        frame
    }
}
