//! Flying saucer: a carrier swept by three slow oscillators, with a faint
//! electronic buzz, gliding past from left to right.

use std::f64::consts::PI;

use foley_spec::FlyingSaucerParams;
use rand_pcg::Pcg32;

use super::{radial_velocity, Effect, PASS_BY_ATTENUATION};
use crate::envelope::cosine_attack;
use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::noise::{high_pass, white_noise};
use crate::oscillator::{doppler_shift, harmonic_stack, phase_track};
use crate::signal::{mix_into, multiply, TimeBase};
use crate::spatial::pass_by;

/// `(rate_hz, weight)` of the sweep oscillators; weights sum to 1 so the
/// combined sweep spans `[0, 2]`.
const SWEEPS: [(f64, f64); 3] = [(0.5, 0.5), (0.7, 0.3), (1.2, 0.2)];
const BUZZ_CUTOFF_HZ: f64 = 3000.0;
const PULSE_HZ: f64 = 2.0;
const ATTACK_SECONDS: f64 = 0.2;

/// Carrier pitch over the clip, Doppler included.
pub fn carrier_track(params: &FlyingSaucerParams, tb: &TimeBase) -> Vec<f64> {
    let velocity = radial_velocity(params.apply_doppler, params.doppler_velocity, tb);
    tb.times()
        .iter()
        .zip(&velocity)
        .map(|(t, v)| {
            let m: f64 = SWEEPS
                .iter()
                .map(|(rate, weight)| weight * (1.0 + (2.0 * PI * rate * t).sin()))
                .sum();
            let low = doppler_shift(params.freq_low, *v);
            let high = doppler_shift(params.freq_high, *v);
            low + (high - low) * m
        })
        .collect()
}

impl Effect for FlyingSaucerParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let sr = tb.sample_rate_f64();
        let phase = phase_track(&carrier_track(self, tb), sr);
        let mut signal = harmonic_stack(&phase, &[(1.0, 0.5), (2.0, 0.25), (3.0, 0.1)]);

        let buzz = high_pass(&white_noise(tb.len(), rng), BUZZ_CUTOFF_HZ, sr);
        mix_into(&mut signal, &buzz, 0.05)?;

        let pulse: Vec<f64> = tb
            .times()
            .iter()
            .map(|t| 1.0 + 0.1 * (2.0 * PI * PULSE_HZ * t).sin())
            .collect();
        multiply(&mut signal, &pulse)?;

        let attack_n = tb.seconds_to_samples(ATTACK_SECONDS).min(tb.len());
        let mut envelope = vec![1.0; tb.len()];
        envelope[..attack_n].copy_from_slice(&cosine_attack(ATTACK_SECONDS, &tb.times()[..attack_n]));
        multiply(&mut signal, &envelope)?;

        Ok(SfxOutput::Stereo(pass_by(&signal, tb, PASS_BY_ATTENUATION)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_stays_within_sweep() {
        let tb = TimeBase::new(4.0, 8000).unwrap();
        let params = FlyingSaucerParams {
            apply_doppler: false,
            ..FlyingSaucerParams::default()
        };
        let track = carrier_track(&params, &tb);
        // All sweeps start at their midpoint.
        assert!((track[0] - params.freq_high).abs() < 1e-9);
        let peak = params.sweep_peak();
        assert!(track
            .iter()
            .all(|f| *f >= params.freq_low - 1e-9 && *f <= peak + 1e-9));
    }
}
