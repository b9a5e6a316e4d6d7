// src/audio/mod.rs
//! Audio module - playback, the processing graph, analysis, and the
//! visualizer.

pub mod analyzer;
pub mod eq;
pub mod fallback;
pub mod graph;
pub mod metadata;
pub mod player;
pub mod tap;
pub mod visualizer;

// Re-export commonly used types
pub use analyzer::SpectrumAnalyzer;
pub use eq::Equalizer;
pub use fallback::{ErrorKind, FallbackState};
pub use graph::{AudioGraph, GraphState};
pub use metadata::{load_metadata, TrackMetadata};
pub use player::{Player, PlayerEvent};
pub use visualizer::{VisualizationMode, Visualizer};
