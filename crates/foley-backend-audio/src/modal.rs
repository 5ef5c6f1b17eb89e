//! Modal resonator bank.
//!
//! Three band-pass resonators stand in for the natural vibration modes of a
//! struck or rubbed object. Each mode's center frequency drifts by a slow
//! random walk; the filter is tuned once to the walk's average rather than
//! retuned per sample.

use rand_pcg::Pcg32;

use crate::filter::{apply_biquad, BiquadCoeffs};
use crate::noise::moving_average;
use crate::rng::gaussian;
use crate::signal::{cumsum, mean, resample_linear};

/// Bank of band-pass resonators applied in parallel to one excitation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalBank {
    /// Mode center frequencies in Hz, lowest-weighted last.
    pub modes: Vec<f64>,
    /// Resonance Q shared by every mode.
    pub q: f64,
    /// Standard deviation of one random-walk step, as a fraction of the mode
    /// frequency.
    pub drift: f64,
    /// Length of the smoothing window applied to the walk, in seconds.
    pub smoothing: f64,
}

impl ModalBank {
    /// Creates a bank with the default 5% drift smoothed over 100 ms.
    pub fn new(modes: Vec<f64>, q: f64) -> Self {
        Self {
            modes,
            q,
            drift: 0.05,
            smoothing: 0.1,
        }
    }

    /// Relative weight of mode `index`: `1 / (1 + 0.3·index)`.
    pub fn mode_weight(index: usize) -> f64 {
        1.0 / (1.0 + index as f64 * 0.3)
    }

    /// Effective center frequency for one mode after drift.
    ///
    /// The walk has `int(duration·5)` steps (at least 2), is centered on zero,
    /// stretched to `n` samples and smoothed; the center is `base·(1 + mean)`
    /// clamped into `[20, sample_rate/2 - 100]`.
    pub fn drifted_center(&self, base: f64, n: usize, sample_rate: f64, rng: &mut Pcg32) -> f64 {
        let changes = ((n as f64 / sample_rate * 0.5 * 10.0) as usize).max(2);
        let steps: Vec<f64> = (0..changes).map(|_| gaussian(rng) * self.drift).collect();
        let walk = cumsum(&steps);
        let centre = mean(&walk);
        let walk: Vec<f64> = walk.iter().map(|w| w - centre).collect();

        let stretched = resample_linear(&walk, n);
        let smoothed = moving_average(&stretched, (sample_rate * self.smoothing) as usize);
        let avg = base * (1.0 + mean(&smoothed));
        avg.clamp(20.0, sample_rate / 2.0 - 100.0)
    }

    /// Runs `excitation` through every mode and sums the weighted outputs.
    pub fn apply(&self, excitation: &[f64], sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let n = excitation.len();
        let mut output = vec![0.0; n];
        for (index, base) in self.modes.iter().enumerate() {
            let center = self.drifted_center(*base, n, sample_rate, rng);
            log::trace!("mode {} drifted {:.1} Hz -> {:.1} Hz", index, base, center);
            let resonated = apply_biquad(excitation, BiquadCoeffs::bandpass(center, self.q, sample_rate));
            let weight = Self::mode_weight(index);
            for (o, r) in output.iter_mut().zip(&resonated) {
                *o += r * weight;
            }
        }
        output
    }
}
