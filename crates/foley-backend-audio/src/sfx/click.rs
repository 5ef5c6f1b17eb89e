//! Short bright button click.

use foley_spec::ButtonClickParams;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::AttackDecay;
use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::noise::{low_pass, white_noise};
use crate::signal::{mix_into, multiply, TimeBase};

const TEXTURE_CUTOFF_HZ: f64 = 8000.0;

impl Effect for ButtonClickParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let mut signal = tb.zeros();
        mix_into(&mut signal, &tb.sine(self.base_freq), 0.6)?;
        mix_into(&mut signal, &tb.sine(self.base_freq * 2.0), 0.3)?;

        let texture = low_pass(&white_noise(tb.len(), rng), TEXTURE_CUTOFF_HZ, tb.sample_rate_f64());
        mix_into(&mut signal, &texture, 0.2)?;

        multiply(&mut signal, &AttackDecay::linear(0.001, 10.0).render(tb))?;
        Ok(SfxOutput::Mono(signal))
    }
}
