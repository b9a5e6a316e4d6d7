// src/audio/graph.rs
//! Audio graph lifecycle: source -> 10-band filter cascade -> analyzer tap
//! -> output. Built at most once per player surface and never torn down on
//! track changes; only per-track source wrappers come and go.

use std::sync::{Arc, Mutex};

use anyhow::{ensure, Result};
use ringbuf::HeapRb;

use super::analyzer::{SpectrumAnalyzer, WINDOW_SIZE};
use super::eq::{FilterChain, BAND_FREQUENCIES};

/// Tap capacity: enough headroom over the analysis window that the UI
/// thread always finds a full recent window (~372ms at 44.1kHz).
const TAP_CAPACITY: usize = 16_384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphState {
    Uninitialized,
    Bound,
    /// Terminal: construction failed once, no retry. Playback continues
    /// without analysis.
    Failed,
}

/// Everything a per-track source wrapper needs from the graph.
#[derive(Clone)]
pub struct GraphWiring {
    pub chain: Arc<Mutex<FilterChain>>,
    pub tap: Arc<Mutex<HeapRb<f32>>>,
}

pub struct AudioGraph {
    state: GraphState,
    wiring: Option<GraphWiring>,
    analyzer: Option<SpectrumAnalyzer>,
    bind_error: Option<String>,
}

impl AudioGraph {
    pub fn new() -> Self {
        Self {
            state: GraphState::Uninitialized,
            wiring: None,
            analyzer: None,
            bind_error: None,
        }
    }

    pub fn state(&self) -> GraphState {
        self.state
    }

    /// Bind the graph. The first call constructs the filter chain and the
    /// analyzer; every later call is a no-op regardless of outcome, so at
    /// most one chain/analyzer pair ever exists per surface.
    pub fn bind(&mut self, sample_rate: f32) -> GraphState {
        if self.state != GraphState::Uninitialized {
            return self.state;
        }
        match Self::construct(sample_rate) {
            Ok((wiring, analyzer)) => {
                self.wiring = Some(wiring);
                self.analyzer = Some(analyzer);
                self.state = GraphState::Bound;
            }
            Err(e) => {
                self.bind_error = Some(e.to_string());
                self.state = GraphState::Failed;
            }
        }
        self.state
    }

    fn construct(sample_rate: f32) -> Result<(GraphWiring, SpectrumAnalyzer)> {
        ensure!(sample_rate > 0.0, "invalid sample rate {sample_rate}");
        ensure!(
            TAP_CAPACITY >= WINDOW_SIZE,
            "tap capacity below analysis window"
        );

        let chain = Arc::new(Mutex::new(FilterChain::build(
            &BAND_FREQUENCIES,
            sample_rate,
        )));
        let tap = Arc::new(Mutex::new(HeapRb::<f32>::new(TAP_CAPACITY)));
        let analyzer = SpectrumAnalyzer::new(tap.clone());

        Ok((GraphWiring { chain, tap }, analyzer))
    }

    /// Handles for wiring a decoded source through the graph. `None`
    /// unless Bound.
    pub fn wiring(&self) -> Option<GraphWiring> {
        self.wiring.clone()
    }

    pub fn analyzer_mut(&mut self) -> Option<&mut SpectrumAnalyzer> {
        self.analyzer.as_mut()
    }

    /// Why the graph failed to bind, kept for the degraded-mode notice in
    /// the player panel. `None` unless Failed.
    pub fn bind_error(&self) -> Option<&str> {
        self.bind_error.as_deref()
    }
}

impl Default for AudioGraph {
    fn default() -> Self {
        Self::new()
    }
}
