//! Explosion: sub-bass rumble under three noise bands, held then decayed,
//! with a fast tremolo and tanh saturation.

use std::f64::consts::PI;

use foley_spec::params::explosion::{RUMBLE_HZ, RUMBLE_OVERTONE};
use foley_spec::ExplosionParams;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::AttackDecay;
use crate::error::AudioResult;
use crate::mixer::{normalize, tanh_limit_buffer, SfxOutput};
use crate::noise::{low_pass, white_noise};
use crate::signal::{mix_into, multiply, TimeBase};

const SUB_BASS_HZ: f64 = 20.0;
const TREMOLO_HZ: f64 = 10.0;

impl Effect for ExplosionParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let sr = tb.sample_rate_f64();
        let mut signal = tb.zeros();
        mix_into(&mut signal, &tb.sine(RUMBLE_HZ), 0.8)?;
        mix_into(&mut signal, &tb.sine(RUMBLE_HZ * RUMBLE_OVERTONE), 0.4)?;
        mix_into(&mut signal, &tb.sine(SUB_BASS_HZ), 0.6)?;

        let noise = white_noise(tb.len(), rng);
        mix_into(&mut signal, &low_pass(&noise, 100.0, sr), 0.5)?;
        mix_into(&mut signal, &low_pass(&noise, 500.0, sr), 0.3)?;
        mix_into(&mut signal, &noise, 0.2)?;

        multiply(&mut signal, &AttackDecay::linear(0.05, 3.0).with_hold(0.2).render(tb))?;

        let tremolo: Vec<f64> = tb
            .times()
            .iter()
            .map(|t| 0.9 + 0.1 * (2.0 * PI * TREMOLO_HZ * t).sin())
            .collect();
        multiply(&mut signal, &tremolo)?;

        // Saturate from full scale; the finishing stage restores the volume.
        normalize(&mut signal, 1.0);
        tanh_limit_buffer(&mut signal, self.drive);
        Ok(SfxOutput::Mono(signal))
    }
}
