// src/audio/visualizer/mod.rs
//! Spectrum/waveform visualizer: four draw modes over the analyzer's
//! frames, themed by the live palette.

pub mod geometry;
pub mod renderer;

use ratatui::{layout::Rect, Frame};

use super::analyzer::SpectrumAnalyzer;
use crate::theme::Palette;
use geometry::Shape;

/// Draw mode, cycled in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationMode {
    Bars,
    Mirrored,
    Circular,
    Waveform,
}

impl VisualizationMode {
    pub fn next(self) -> Self {
        match self {
            VisualizationMode::Bars => VisualizationMode::Mirrored,
            VisualizationMode::Mirrored => VisualizationMode::Circular,
            VisualizationMode::Circular => VisualizationMode::Waveform,
            VisualizationMode::Waveform => VisualizationMode::Bars,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisualizationMode::Bars => "bars",
            VisualizationMode::Mirrored => "mirrored",
            VisualizationMode::Circular => "circular",
            VisualizationMode::Waveform => "waveform",
        }
    }
}

/// Visualizer state: the selected draw mode. Frames and the palette are
/// read fresh every render so mid-session theme or mode changes show up on
/// the very next frame; pane visibility lives with the layout toggles.
pub struct Visualizer {
    mode: VisualizationMode,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            mode: VisualizationMode::Bars,
        }
    }

    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: VisualizationMode) {
        self.mode = mode;
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Build this frame's draw list from a fresh analyzer snapshot.
    pub fn shapes(
        &self,
        analyzer: &mut SpectrumAnalyzer,
        width: f64,
        height: f64,
        palette: &Palette,
    ) -> Vec<Shape> {
        match self.mode {
            VisualizationMode::Bars => {
                geometry::bars(&analyzer.frequency_frame(), width, height, palette)
            }
            VisualizationMode::Mirrored => {
                geometry::mirrored(&analyzer.frequency_frame(), width, height, palette)
            }
            VisualizationMode::Circular => {
                geometry::circular(&analyzer.frequency_frame(), width, height, palette)
            }
            VisualizationMode::Waveform => {
                geometry::waveform(&analyzer.time_frame(), width, height, palette)
            }
        }
    }

    /// Render one frame. With no analyzer (graph Failed or not yet bound)
    /// the pane stays empty apart from its border and background.
    pub fn render(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        analyzer: Option<&mut SpectrumAnalyzer>,
        palette: &Palette,
    ) {
        let (width, height) = renderer::canvas_size(area);
        let shapes = match analyzer {
            Some(a) => self.shapes(a, width, height, palette),
            None => Vec::new(),
        };
        let title = format!("4: Visualizer [{}]", self.mode.label());
        renderer::render_shapes(f, area, &title, &shapes, palette);
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_follows_the_fixed_order() {
        let mut mode = VisualizationMode::Bars;
        let order = [
            VisualizationMode::Mirrored,
            VisualizationMode::Circular,
            VisualizationMode::Waveform,
            VisualizationMode::Bars,
        ];
        for expected in order {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn set_mode_jumps_anywhere_in_the_cycle() {
        let mut v = Visualizer::new();
        assert_eq!(v.mode(), VisualizationMode::Bars);
        v.set_mode(VisualizationMode::Waveform);
        assert_eq!(v.mode(), VisualizationMode::Waveform);
        v.cycle_mode();
        assert_eq!(v.mode(), VisualizationMode::Bars);
    }
}
