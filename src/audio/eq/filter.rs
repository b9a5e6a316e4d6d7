// src/audio/eq/filter.rs
//! Peaking biquad filters and the ordered 10-band cascade.

/// Fixed quality factor for every band (bell bandwidth).
const BAND_Q: f64 = 1.4;

/// Gain range accepted by the chain, in dB. Out-of-range values are
/// clamped, not rejected.
pub const GAIN_MIN_DB: f32 = -12.0;
pub const GAIN_MAX_DB: f32 = 12.0;

/// One peaking (bell) biquad with per-channel state for stereo.
#[derive(Debug, Clone)]
struct PeakingFilter {
    freq: f32,
    gain_db: f32,
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: [f64; 2],
    x2: [f64; 2],
    y1: [f64; 2],
    y2: [f64; 2],
}

impl PeakingFilter {
    fn new(freq: f32, sample_rate: f32) -> Self {
        let mut f = Self {
            freq,
            gain_db: 0.0,
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: [0.0; 2],
            x2: [0.0; 2],
            y1: [0.0; 2],
            y2: [0.0; 2],
        };
        f.design(sample_rate);
        f
    }

    /// RBJ cookbook peaking EQ coefficients.
    fn design(&mut self, sample_rate: f32) {
        let a = 10.0_f64.powf(self.gain_db as f64 / 40.0);
        let w0 = 2.0 * std::f64::consts::PI * self.freq as f64 / sample_rate as f64;
        let alpha = w0.sin() / (2.0 * BAND_Q);
        let cos_w0 = w0.cos();

        let b0 = 1.0 + alpha * a;
        let b1 = -2.0 * cos_w0;
        let b2 = 1.0 - alpha * a;
        let a0 = 1.0 + alpha / a;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha / a;

        self.b0 = b0 / a0;
        self.b1 = b1 / a0;
        self.b2 = b2 / a0;
        self.a1 = a1 / a0;
        self.a2 = a2 / a0;
    }

    fn process(&mut self, input: f32, channel: usize) -> f32 {
        let x = input as f64;
        let y = self.b0 * x + self.b1 * self.x1[channel] + self.b2 * self.x2[channel]
            - self.a1 * self.y1[channel]
            - self.a2 * self.y2[channel];

        self.x2[channel] = self.x1[channel];
        self.x1[channel] = x;
        self.y2[channel] = self.y1[channel];
        self.y1[channel] = y;

        y as f32
    }

    fn reset(&mut self) {
        self.x1 = [0.0; 2];
        self.x2 = [0.0; 2];
        self.y1 = [0.0; 2];
        self.y2 = [0.0; 2];
    }
}

/// Ordered cascade of peaking filters, one per fixed center frequency,
/// all starting at zero gain.
#[derive(Debug, Clone)]
pub struct FilterChain {
    filters: Vec<PeakingFilter>,
    sample_rate: f32,
}

impl FilterChain {
    pub fn build(band_frequencies: &[f32], sample_rate: f32) -> Self {
        Self {
            filters: band_frequencies
                .iter()
                .map(|&f| PeakingFilter::new(f, sample_rate))
                .collect(),
            sample_rate,
        }
    }

    pub fn band_count(&self) -> usize {
        self.filters.len()
    }

    /// Set one band's gain in dB, clamped to [-12, 12], redesigning the
    /// coefficients in place so the change is audible immediately.
    pub fn set_gain(&mut self, index: usize, db: f32) {
        if let Some(f) = self.filters.get_mut(index) {
            f.gain_db = db.clamp(GAIN_MIN_DB, GAIN_MAX_DB);
            f.design(self.sample_rate);
        }
    }

    pub fn gain(&self, index: usize) -> Option<f32> {
        self.filters.get(index).map(|f| f.gain_db)
    }

    /// Retune the cascade for a new source sample rate, preserving gains.
    /// Delay lines are reset; the chain itself is never rebuilt.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if (sample_rate - self.sample_rate).abs() < f32::EPSILON {
            return;
        }
        self.sample_rate = sample_rate;
        for f in &mut self.filters {
            f.reset();
            f.design(sample_rate);
        }
    }

    /// Run one sample through every band in order.
    pub fn process(&mut self, input: f32, channel: usize) -> f32 {
        let ch = channel.min(1);
        let mut sample = input;
        for f in &mut self.filters {
            sample = f.process(sample, ch);
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::eq::BAND_FREQUENCIES;

    #[test]
    fn build_creates_one_filter_per_band_at_zero_gain() {
        let chain = FilterChain::build(&BAND_FREQUENCIES, 44_100.0);
        assert_eq!(chain.band_count(), 10);
        for i in 0..10 {
            assert_eq!(chain.gain(i), Some(0.0));
        }
    }

    #[test]
    fn set_gain_clamps_out_of_range_values() {
        let mut chain = FilterChain::build(&BAND_FREQUENCIES, 44_100.0);
        chain.set_gain(0, 40.0);
        assert_eq!(chain.gain(0), Some(12.0));
        chain.set_gain(0, -99.0);
        assert_eq!(chain.gain(0), Some(-12.0));
        // Out-of-range index is a no-op.
        chain.set_gain(99, 3.0);
    }

    #[test]
    fn flat_chain_passes_signal_nearly_unchanged() {
        let mut chain = FilterChain::build(&BAND_FREQUENCIES, 44_100.0);
        // A zero-gain peaking cascade is an identity filter.
        for i in 0..256 {
            let x = ((i as f32) * 0.05).sin() * 0.5;
            let y = chain.process(x, 0);
            assert!((x - y).abs() < 1e-4, "sample {i}: {x} vs {y}");
        }
    }

    #[test]
    fn retune_preserves_gains_and_clears_delay_lines() {
        let mut chain = FilterChain::build(&BAND_FREQUENCIES, 44_100.0);
        chain.set_gain(0, 5.0);
        chain.set_gain(9, -3.0);
        // Fill the delay lines with non-zero state.
        for i in 0..512 {
            let _ = chain.process(((i as f32) * 0.1).sin(), 0);
        }

        chain.set_sample_rate(48_000.0);
        assert_eq!(chain.gain(0), Some(5.0));
        assert_eq!(chain.gain(9), Some(-3.0));
        // Reset state: silence in must be exactly silence out, with no
        // IIR tail from the samples fed at the old rate.
        assert_eq!(chain.process(0.0, 0), 0.0);

        // Same-rate retune is a no-op that keeps running state intact.
        chain.process(0.7, 0);
        chain.set_sample_rate(48_000.0);
        assert_ne!(chain.process(0.0, 0), 0.0);
    }

    #[test]
    fn boosted_band_amplifies_a_tone_at_its_center() {
        let mut chain = FilterChain::build(&BAND_FREQUENCIES, 44_100.0);
        chain.set_gain(4, 12.0); // 1 kHz

        let sample_rate = 44_100.0;
        let freq = 1_000.0;
        let mut in_power = 0.0f64;
        let mut out_power = 0.0f64;
        // Skip the first cycle so the filter state settles.
        for i in 0..8_192 {
            let x = (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin();
            let y = chain.process(x, 0);
            if i >= 1_024 {
                in_power += (x * x) as f64;
                out_power += (y * y) as f64;
            }
        }
        assert!(out_power > in_power * 2.0);
    }
}
