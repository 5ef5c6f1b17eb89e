//! Dull impact: a low sine with smoothed noise for body.

use foley_spec::ThudParams;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::AttackDecay;
use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::noise::{low_pass, white_noise};
use crate::signal::{mix_into, multiply, scale, TimeBase};

const BODY_CUTOFF_HZ: f64 = 50.0;

impl Effect for ThudParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let mut signal = tb.sine(self.base_freq);
        scale(&mut signal, 0.6 * 0.5);

        let body = low_pass(&white_noise(tb.len(), rng), BODY_CUTOFF_HZ, tb.sample_rate_f64());
        mix_into(&mut signal, &body, 0.4)?;

        multiply(&mut signal, &AttackDecay::linear(0.005, 4.0).render(tb))?;
        Ok(SfxOutput::Mono(signal))
    }
}
