//! Friction voice shared by the door creak and wind effects.
//!
//! A sine whose pitch wobbles at three slow rates and jumps at random "stick"
//! points, over band-passed friction noise and a sub-harmonic rumble. The two
//! effects differ only in their [`CreakVoice`] constants.

use std::f64::consts::PI;

use foley_spec::{DoorCreakParams, WindParams};
use rand::Rng;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::AttackDecay;
use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::noise::{band_pass, moving_average, white_noise};
use crate::oscillator::{phase_track, tone};
use crate::rng::gaussian;
use crate::signal::{mix_into, multiply, scale, TimeBase};

const STICK_HOLD_SECONDS: f64 = 0.08;
const STICK_JUMP_HZ: f64 = 200.0;
const RUMBLE_RATIO: f64 = 0.15;

/// Constants for one flavor of the creak voice.
#[derive(Debug, Clone, PartialEq)]
pub struct CreakVoice {
    /// Center pitch in Hz.
    pub base_freq: f64,
    /// Stick events per second.
    pub stick_rate: f64,
    /// `(rate_hz, weight)` pairs summed into the pitch wobble.
    pub wobbles: [(f64, f64); 3],
    /// Wobble scale relative to `base_freq`.
    pub wobble_depth: f64,
    /// Friction noise band.
    pub band: (f64, f64),
    /// Rate of the slow swell on the friction noise.
    pub friction_rate: f64,
    /// Friction noise level.
    pub noise_mix: f64,
    /// Decay steepness.
    pub decay_rate: f64,
}

impl CreakVoice {
    /// Slow, deep wobble of an old door.
    pub fn door(params: &DoorCreakParams) -> Self {
        Self {
            base_freq: params.base_freq,
            stick_rate: params.stick_rate,
            wobbles: [(0.12, 0.7), (0.3, 0.5), (0.6, 0.4)],
            wobble_depth: 0.6,
            band: (800.0, 2000.0),
            friction_rate: 0.04,
            noise_mix: 0.4,
            decay_rate: 1.5,
        }
    }

    /// Faster, shallower wobble of wind through a gap.
    pub fn wind(params: &WindParams) -> Self {
        Self {
            base_freq: params.base_freq,
            stick_rate: params.stick_rate,
            wobbles: [(0.8, 0.3), (1.5, 0.2), (2.3, 0.1)],
            wobble_depth: 0.15,
            band: (600.0, 1500.0),
            friction_rate: 0.3,
            noise_mix: 0.35,
            decay_rate: 0.8,
        }
    }

    /// Pitch track with wobble and stick jumps applied.
    pub fn frequency_track(&self, tb: &TimeBase, rng: &mut Pcg32) -> Vec<f64> {
        let mut track: Vec<f64> = tb
            .times()
            .iter()
            .map(|t| {
                let wobble: f64 = self
                    .wobbles
                    .iter()
                    .map(|(rate, weight)| weight * (2.0 * PI * rate * t).sin())
                    .sum();
                self.base_freq * (1.0 + self.wobble_depth * wobble)
            })
            .collect();

        let n = tb.len();
        let hold = tb.seconds_to_samples(STICK_HOLD_SECONDS);
        let sticks = (tb.duration() * self.stick_rate) as usize;
        for _ in 0..sticks {
            let start = ((rng.gen::<f64>() * n as f64) as usize).min(n);
            let jump = rng.gen_range(-STICK_JUMP_HZ..STICK_JUMP_HZ);
            let end = (start + hold).min(n);
            for f in &mut track[start..end] {
                *f += jump;
            }
        }
        track
    }

    /// Renders the voice over `tb`.
    pub fn render(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<Vec<f64>> {
        let sr = tb.sample_rate_f64();
        let track = self.frequency_track(tb, rng);

        let mut signal = tone(&phase_track(&track, sr), 1.0);
        scale(&mut signal, 0.6);

        let (low, high) = self.band;
        let mut friction = band_pass(&white_noise(tb.len(), rng), low, high, sr);
        let swell: Vec<f64> = tb
            .times()
            .iter()
            .map(|t| 0.5 + 0.3 * (2.0 * PI * self.friction_rate * t).sin())
            .collect();
        multiply(&mut friction, &swell)?;
        mix_into(&mut signal, &friction, self.noise_mix)?;

        let rumble_track: Vec<f64> = track.iter().map(|f| f * RUMBLE_RATIO).collect();
        mix_into(&mut signal, &tone(&phase_track(&rumble_track, sr), 1.0), 0.25)?;

        let mut envelope = AttackDecay::cosine(1.0, self.decay_rate).render(tb);
        let pressure: Vec<f64> = (0..tb.len()).map(|_| 0.85 + 0.15 * gaussian(rng)).collect();
        multiply(&mut envelope, &moving_average(&pressure, (sr / 8.0) as usize))?;
        multiply(&mut signal, &envelope)?;
        Ok(signal)
    }
}

impl Effect for DoorCreakParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        Ok(SfxOutput::Mono(CreakVoice::door(self).render(tb, rng)?))
    }
}

impl Effect for WindParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        Ok(SfxOutput::Mono(CreakVoice::wind(self).render(tb, rng)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_track_without_sticks_is_pure_wobble() {
        let tb = TimeBase::new(0.5, 8000).unwrap();
        let voice = CreakVoice {
            stick_rate: 0.0,
            ..CreakVoice::door(&DoorCreakParams::default())
        };
        let track = voice.frequency_track(&tb, &mut create_rng(1));
        assert_eq!(track[0], voice.base_freq);
        let max_dev = 0.6 * (0.7 + 0.5 + 0.4) * voice.base_freq;
        assert!(track.iter().all(|f| (f - voice.base_freq).abs() <= max_dev + 1e-9));
    }

    #[test]
    fn test_sticks_shift_track() {
        let tb = TimeBase::new(2.0, 8000).unwrap();
        let mut voice = CreakVoice::wind(&WindParams::default());
        voice.stick_rate = 0.0;
        let smooth = voice.frequency_track(&tb, &mut create_rng(5));
        voice.stick_rate = 4.0;
        let sticky = voice.frequency_track(&tb, &mut create_rng(5));
        let moved = smooth
            .iter()
            .zip(&sticky)
            .filter(|(a, b)| (*a - *b).abs() > 1e-9)
            .count();
        assert!(moved > 0);
        // Eight sticks of 80 ms cover at most 5120 samples.
        assert!(moved <= 8 * 640);
    }

    #[test]
    fn test_wind_render_is_finite() {
        let tb = TimeBase::new(1.5, 8000).unwrap();
        let signal = CreakVoice::wind(&WindParams::default())
            .render(&tb, &mut create_rng(2))
            .unwrap();
        assert_eq!(signal.len(), tb.len());
        assert!(signal.iter().all(|s| s.is_finite()));
        assert!(crate::signal::peak(&signal) > 0.0);
    }
}
