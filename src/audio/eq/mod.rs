// src/audio/eq/mod.rs
//! 10-band graphic equalizer: gain state, named presets, and the live
//! filter cascade the audio thread processes through.

pub mod filter;
pub mod presets;

use std::sync::{Arc, Mutex};

pub use filter::{FilterChain, GAIN_MAX_DB, GAIN_MIN_DB};
pub use presets::{preset, preset_names};

/// Fixed band center frequencies in Hz, low to high.
pub const BAND_FREQUENCIES: [f32; 10] = [
    60.0, 170.0, 310.0, 600.0, 1_000.0, 3_000.0, 6_000.0, 12_000.0, 14_000.0, 16_000.0,
];

pub const BAND_COUNT: usize = 10;

/// Label shown for hand-edited gain vectors.
pub const CUSTOM_LABEL: &str = "Custom";

/// Equalizer controller. Owns the gain vector and preset label and pushes
/// every change into the shared filter chain, which the audio thread reads
/// while decoding.
pub struct Equalizer {
    gains: [f32; BAND_COUNT],
    label: String,
    chain: Arc<Mutex<FilterChain>>,
}

impl Equalizer {
    pub fn new(chain: Arc<Mutex<FilterChain>>) -> Self {
        Self {
            gains: [0.0; BAND_COUNT],
            label: "Flat".to_string(),
            chain,
        }
    }

    pub fn gains(&self) -> &[f32; BAND_COUNT] {
        &self.gains
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Apply a named preset. Unknown names are a silent no-op.
    pub fn apply_preset(&mut self, name: &str) {
        let Some(gains) = presets::preset(name) else {
            return;
        };
        self.gains = gains;
        self.label = name.to_string();
        if let Ok(mut chain) = self.chain.lock() {
            for (i, &g) in gains.iter().enumerate() {
                chain.set_gain(i, g);
            }
        }
    }

    /// Set one band by hand. Always forces the "Custom" label, even if the
    /// resulting vector happens to match a named preset.
    pub fn set_band(&mut self, index: usize, db: f32) {
        if index >= BAND_COUNT {
            return;
        }
        let clamped = db.clamp(GAIN_MIN_DB, GAIN_MAX_DB);
        self.gains[index] = clamped;
        self.label = CUSTOM_LABEL.to_string();
        if let Ok(mut chain) = self.chain.lock() {
            chain.set_gain(index, clamped);
        }
    }

    /// Nudge one band by a delta (slider step in the UI).
    pub fn adjust_band(&mut self, index: usize, delta: f32) {
        if let Some(&g) = self.gains.get(index) {
            self.set_band(index, g + delta);
        }
    }

    /// Apply the preset after the current label in table order, wrapping.
    /// From "Custom" this starts back at the first preset.
    pub fn cycle_preset(&mut self) {
        let names: Vec<&str> = presets::preset_names().collect();
        let next = names
            .iter()
            .position(|n| *n == self.label)
            .map(|i| (i + 1) % names.len())
            .unwrap_or(0);
        self.apply_preset(names[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equalizer() -> Equalizer {
        let chain = Arc::new(Mutex::new(FilterChain::build(&BAND_FREQUENCIES, 44_100.0)));
        Equalizer::new(chain)
    }

    #[test]
    fn flat_preset_zeroes_vector_and_chain() {
        let eq = {
            let mut eq = equalizer();
            eq.apply_preset("Rock");
            eq.apply_preset("Flat");
            eq
        };
        assert_eq!(eq.gains(), &[0.0; 10]);
        assert_eq!(eq.label(), "Flat");
        let chain = eq.chain.lock().unwrap();
        for i in 0..10 {
            assert_eq!(chain.gain(i), Some(0.0));
        }
    }

    #[test]
    fn unknown_preset_is_a_silent_noop() {
        let mut eq = equalizer();
        eq.apply_preset("Rock");
        eq.apply_preset("Polka");
        assert_eq!(eq.label(), "Rock");
        assert_eq!(eq.gains()[0], 5.0);
    }

    #[test]
    fn manual_edit_forces_custom_label() {
        let mut eq = equalizer();
        eq.apply_preset("Rock");
        eq.set_band(4, 7.0);
        assert_eq!(
            eq.gains(),
            &[5.0, 4.0, 3.0, 1.0, 7.0, -1.0, 1.0, 3.0, 4.0, 5.0]
        );
        assert_eq!(eq.label(), CUSTOM_LABEL);
    }

    #[test]
    fn label_is_never_rederived_from_values() {
        let mut eq = equalizer();
        eq.apply_preset("Flat");
        // Hand-reconstruct the Flat vector: label must stay "Custom".
        eq.set_band(0, 3.0);
        eq.set_band(0, 0.0);
        assert_eq!(eq.gains(), &[0.0; 10]);
        assert_eq!(eq.label(), CUSTOM_LABEL);
    }

    #[test]
    fn set_band_clamps_and_reaches_the_chain() {
        let mut eq = equalizer();
        eq.set_band(2, 30.0);
        assert_eq!(eq.gains()[2], 12.0);
        assert_eq!(eq.chain.lock().unwrap().gain(2), Some(12.0));
    }

    #[test]
    fn cycle_runs_through_table_order() {
        let mut eq = equalizer();
        assert_eq!(eq.label(), "Flat");
        eq.cycle_preset();
        assert_eq!(eq.label(), "Rock");
        eq.set_band(0, 1.0);
        eq.cycle_preset();
        assert_eq!(eq.label(), "Flat");
    }
}
