//! Emergency siren driving past from left to right.

use std::f64::consts::PI;

use foley_spec::{SirenParams, SirenType};
use rand_pcg::Pcg32;

use super::{radial_velocity, Effect, PASS_BY_ATTENUATION};
use crate::envelope::linear_attack;
use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::noise::low_pass;
use crate::oscillator::{doppler_shift, harmonic_stack, phase_track, tone};
use crate::signal::{multiply, TimeBase};
use crate::spatial::pass_by;

const ATTACK_SECONDS: f64 = 0.1;
const SWITCH_SMOOTHING_HZ: f64 = 100.0;

/// Zero-preserving sign.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `freq` shifted by each sample's radial velocity.
fn shifted(freq: f64, velocity: &[f64]) -> Vec<f64> {
    velocity.iter().map(|v| doppler_shift(freq, *v)).collect()
}

/// `0.5·(1 + sin(2π·rate·t))` over the time base.
fn sweep(tb: &TimeBase, rate: f64) -> Vec<f64> {
    tb.times()
        .iter()
        .map(|t| 0.5 * (1.0 + (2.0 * PI * rate * t).sin()))
        .collect()
}

/// Carrier pitch of the wail pattern, Doppler included.
///
/// With Doppler off this is exactly `low + (high - low)·m`.
pub fn wail_track(params: &SirenParams, tb: &TimeBase) -> Vec<f64> {
    let (low, high) = params.band();
    let velocity = radial_velocity(params.apply_doppler, params.doppler_velocity, tb);
    let low_track = shifted(low, &velocity);
    let high_track = shifted(high, &velocity);
    sweep(tb, params.siren_speed)
        .iter()
        .zip(low_track.iter().zip(&high_track))
        .map(|(m, (lo, hi))| lo + (hi - lo) * m)
        .collect()
}

fn wail(params: &SirenParams, tb: &TimeBase) -> Vec<f64> {
    let phase = phase_track(&wail_track(params, tb), tb.sample_rate_f64());
    harmonic_stack(&phase, &[(1.0, 0.4), (2.0, 0.2), (3.0, 0.1)])
}

fn hi_lo(params: &SirenParams, tb: &TimeBase) -> Vec<f64> {
    let sr = tb.sample_rate_f64();
    let (low, high) = params.band();
    let velocity = radial_velocity(params.apply_doppler, params.doppler_velocity, tb);
    let low_tone = tone(&phase_track(&shifted(low, &velocity), sr), 1.0);
    let high_tone = tone(&phase_track(&shifted(high, &velocity), sr), 1.0);

    let square: Vec<f64> = tb
        .times()
        .iter()
        .map(|t| sign((2.0 * PI * params.siren_speed * t).sin()))
        .collect();
    let switch = low_pass(&square, SWITCH_SMOOTHING_HZ, sr);

    switch
        .iter()
        .zip(low_tone.iter().zip(&high_tone))
        .map(|(s, (lo, hi))| {
            let s = (s + 1.0) / 2.0;
            0.4 * ((1.0 - s) * lo + s * hi)
        })
        .collect()
}

fn yelp(params: &SirenParams, tb: &TimeBase) -> Vec<f64> {
    let (low, high) = params.band();
    let velocity = radial_velocity(params.apply_doppler, params.doppler_velocity, tb);
    let carrier = tone(&phase_track(&shifted((low + high) / 2.0, &velocity), tb.sample_rate_f64()), 1.0);
    carrier
        .iter()
        .zip(tb.times())
        .map(|(c, t)| 0.5 * c * sign((2.0 * PI * 2.0 * params.siren_speed * t).sin()))
        .collect()
}

impl Effect for SirenParams {
    fn synthesize(&self, tb: &TimeBase, _rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let mut signal = match self.siren_type {
            SirenType::Wail => wail(self, tb),
            SirenType::HiLo => hi_lo(self, tb),
            SirenType::Yelp => yelp(self, tb),
        };

        let mut envelope = vec![1.0; tb.len()];
        let attack_n = tb.seconds_to_samples(ATTACK_SECONDS).min(tb.len());
        envelope[..attack_n].copy_from_slice(&linear_attack(attack_n));
        multiply(&mut signal, &envelope)?;

        Ok(SfxOutput::Stereo(pass_by(&signal, tb, PASS_BY_ATTENUATION)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_preserves_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.0), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }

    #[test]
    fn test_wail_track_spans_band_without_doppler() {
        let tb = TimeBase::new(1.0, 8000).unwrap();
        let params = SirenParams {
            apply_doppler: false,
            siren_speed: 1.0,
            ..SirenParams::default()
        };
        let track = wail_track(&params, &tb);
        assert_eq!(track[0], 1000.0);
        assert_eq!(track[2000], 1200.0);
        assert!(track.iter().all(|f| *f >= 800.0 - 1e-9 && *f <= 1200.0 + 1e-9));
    }

    #[test]
    fn test_doppler_raises_then_lowers_pitch() {
        let tb = TimeBase::new(2.0, 8000).unwrap();
        let plain = wail_track(
            &SirenParams {
                apply_doppler: false,
                ..SirenParams::default()
            },
            &tb,
        );
        let moving = wail_track(&SirenParams::default(), &tb);
        assert!(moving[10] > plain[10]);
        assert!(moving[15_990] < plain[15_990]);
    }

    #[test]
    fn test_yelp_flips_polarity() {
        let tb = TimeBase::new(0.5, 8000).unwrap();
        let params = SirenParams {
            siren_type: SirenType::Yelp,
            apply_doppler: false,
            ..SirenParams::default()
        };
        let signal = yelp(&params, &tb);
        assert_eq!(signal.len(), tb.len());
        assert!(signal.iter().all(|s| s.abs() <= 0.5 + 1e-12));
    }
}
