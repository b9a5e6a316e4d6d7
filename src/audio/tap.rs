// src/audio/tap.rs
//! A wrapper source that runs samples through the shared equalizer chain
//! and taps the result into a circular buffer for spectrum analysis.

use std::sync::{Arc, Mutex};

use ringbuf::{traits::*, HeapRb};
use rodio::Source;

use super::eq::FilterChain;

/// Pass-through source: equalize, capture, emit. One is created per track;
/// the chain and tap buffer behind it live for the whole surface.
pub struct ProcessedSource<S> {
    source: S,
    chain: Arc<Mutex<FilterChain>>,
    buffer: Arc<Mutex<HeapRb<f32>>>,
    /// Interleaved-channel cursor for the per-channel filter state.
    channel: usize,
}

impl<S> ProcessedSource<S>
where
    S: Source<Item = f32>,
{
    pub fn new(
        source: S,
        chain: Arc<Mutex<FilterChain>>,
        buffer: Arc<Mutex<HeapRb<f32>>>,
    ) -> Self {
        if let Ok(mut c) = chain.lock() {
            c.set_sample_rate(source.sample_rate() as f32);
        }
        Self {
            source,
            chain,
            buffer,
            channel: 0,
        }
    }
}

impl<S> Iterator for ProcessedSource<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.source.next()?;

        let processed = match self.chain.lock() {
            Ok(mut chain) => chain.process(sample, self.channel),
            Err(_) => sample,
        };
        let channels = self.source.channels().max(1) as usize;
        self.channel = (self.channel + 1) % channels;

        // Overwrite the oldest sample if the tap is full.
        if let Ok(mut buf) = self.buffer.lock() {
            if buf.is_full() {
                let _ = buf.try_pop();
            }
            let _ = buf.try_push(processed);
        }
        Some(processed)
    }
}

impl<S> Source for ProcessedSource<S>
where
    S: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.source.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.source.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }

    fn total_duration(&self) -> Option<std::time::Duration> {
        self.source.total_duration()
    }
}
