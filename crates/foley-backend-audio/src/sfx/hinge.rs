//! Hinge creak: stick-slip friction exciting a modal resonator bank, plus a
//! tonal squeal whose pitch climbs while the friction rises.

use foley_spec::HingeCreakParams;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::{fade_in_out, StickSlip};
use crate::error::AudioResult;
use crate::mixer::{normalize, SfxOutput};
use crate::modal::ModalBank;
use crate::noise::{moving_average, white_noise};
use crate::oscillator::{harmonic_stack, phase_track};
use crate::rng::gaussian;
use crate::signal::{cumsum, gradient, mean, mix_into, multiply, resample_linear, TimeBase};

const GLIDE_SMOOTHING_SAMPLES: usize = 100;
const FADE_IN_SECONDS: f64 = 0.3;
const FADE_OUT_SECONDS: f64 = 0.5;

/// Band-limited friction noise shaped by the stick-slip envelope.
///
/// The low-pass window is half the period of `high_hz` and is skipped when
/// `high_hz` is at or above Nyquist.
pub fn friction_noise(
    envelope: &[f64],
    low_hz: f64,
    high_hz: f64,
    sample_rate: f64,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    let mut noise = white_noise(envelope.len(), rng);
    if high_hz < sample_rate / 2.0 {
        noise = moving_average(&noise, ((sample_rate / high_hz / 2.0) as usize).max(1));
    }
    let low_band = moving_average(&noise, ((sample_rate / low_hz) as usize).max(1));
    mix_into(&mut noise, &low_band, -1.0)?;
    multiply(&mut noise, envelope)?;
    Ok(noise)
}

/// Per-sample pitch of the squeal.
///
/// A slow random walk (±10%) plus an upward glide that follows the positive
/// slope of the smoothed friction envelope, capped at ±50%.
pub fn squeal_track(
    base_freq: f64,
    glide_rate_oct: f64,
    envelope: &[f64],
    sample_rate: f64,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let n = envelope.len();
    let points = (n as f64 / sample_rate * 2.0) as usize + 2;
    let steps: Vec<f64> = (0..points).map(|_| gaussian(rng) * 0.02).collect();
    let walk = cumsum(&steps);
    let centre = mean(&walk);
    let walk: Vec<f64> = walk.iter().map(|w| (w - centre).clamp(-0.1, 0.1)).collect();
    let walk = resample_linear(&walk, n);

    let slope = gradient(&moving_average(envelope, GLIDE_SMOOTHING_SAMPLES));
    walk.iter()
        .zip(&slope)
        .map(|(w, s)| {
            let rising = (s * sample_rate).max(0.0);
            let glide = (rising * glide_rate_oct * 0.01).clamp(-0.5, 0.5);
            base_freq * (1.0 + w + glide)
        })
        .collect()
}

impl Effect for HingeCreakParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let sr = tb.sample_rate_f64();
        let n = tb.len();

        let envelope = StickSlip::new(self.burst_rate_hz, self.burst_duration_ms).render(n, sr, rng);
        let friction = friction_noise(
            &envelope,
            self.noise_band_low_hz,
            self.noise_band_high_hz,
            sr,
            rng,
        )?;
        let mut resonated = ModalBank::new(self.modes().to_vec(), self.mode_q).apply(&friction, sr, rng);

        let track = squeal_track(self.squeal_base(), self.glide_rate_oct, &envelope, sr, rng);
        let mut squeal = harmonic_stack(&phase_track(&track, sr), &[(1.0, 0.6), (2.0, 0.25), (3.0, 0.15)]);
        multiply(&mut squeal, &envelope)?;

        normalize(&mut resonated, 1.0);
        normalize(&mut squeal, 1.0);
        let noise_gain = 10f64.powf(self.noise_to_tone_db / 20.0);
        log::trace!("hinge noise gain {:.3} over tone", noise_gain);

        let mut signal = squeal;
        mix_into(&mut signal, &resonated, noise_gain)?;
        multiply(
            &mut signal,
            &fade_in_out(n, tb.seconds_to_samples(FADE_IN_SECONDS), tb.seconds_to_samples(FADE_OUT_SECONDS)),
        )?;
        Ok(SfxOutput::Mono(signal))
    }
}
