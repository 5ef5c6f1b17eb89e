//! Gravel footsteps: discrete crunchy steps walking from near-left to
//! far-right.

use foley_spec::params::footsteps::FIRST_STEP_SECONDS;
use foley_spec::GravelFootstepsParams;
use rand::Rng;
use rand_pcg::Pcg32;

use super::Effect;
use crate::envelope::AttackDecay;
use crate::error::AudioResult;
use crate::mixer::{SfxOutput, StereoPair};
use crate::noise::{low_pass, white_noise};
use crate::rng::gaussian;
use crate::signal::{linspace, mix_into, multiply, scale, TimeBase};
use crate::spatial::pan_into;

const STEP_ATTENUATION: f64 = 0.9;
const TIMING_JITTER_SECONDS: f64 = 0.3;
const IMPACT_SECONDS: f64 = 0.002;
/// Smallest gap between two step onsets.
const MIN_STEP_GAP_SECONDS: f64 = 0.05;

/// Onset of the step after one at `step_time`, given a uniform draw `r` in
/// `[0, 1)`. Jitter never moves a step before its predecessor.
pub fn next_step_time(step_time: f64, steps_per_second: f64, r: f64) -> f64 {
    let gap = 1.0 / steps_per_second + (r - 0.5) * TIMING_JITTER_SECONDS;
    step_time + gap.max(MIN_STEP_GAP_SECONDS)
}

/// One step: three noise bands for stone sizes plus sharp stone impacts,
/// with a 2 ms attack and a fast decay.
pub fn gravel_step(num_samples: usize, sample_rate: u32, rng: &mut Pcg32) -> AudioResult<Vec<f64>> {
    let sr = sample_rate as f64;
    let noise = white_noise(num_samples, rng);
    let mut step = noise.clone();
    scale(&mut step, 0.2);
    mix_into(&mut step, &low_pass(&noise, 1000.0, sr), 0.4)?;
    mix_into(&mut step, &low_pass(&noise, 200.0, sr), 0.4)?;

    let impacts = 8 + (rng.gen::<f64>() * 8.0) as usize;
    let impact_len = (sr * IMPACT_SECONDS) as usize;
    for _ in 0..impacts {
        let start = (rng.gen::<f64>() * num_samples as f64) as usize;
        if start >= num_samples {
            continue;
        }
        let end = (start + impact_len).min(num_samples);
        let decay = linspace(0.0, 1.0, end - start);
        for (s, x) in step[start..end].iter_mut().zip(decay) {
            *s += gaussian(rng) * (-10.0 * x).exp() * 0.8;
        }
    }

    let tb = TimeBase::new(num_samples as f64 / sr, sample_rate)?;
    multiply(&mut step, &AttackDecay::linear(IMPACT_SECONDS, 6.0).render(&tb))?;
    Ok(step)
}

impl Effect for GravelFootstepsParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        let total = tb.len();
        let duration = tb.duration();
        let mut pair = StereoPair::silent(total);

        let mut step_time = FIRST_STEP_SECONDS;
        let mut steps = 0usize;
        while step_time < duration {
            let start = tb.seconds_to_samples(step_time);
            let step_len = tb.seconds_to_samples(self.step_duration * (0.75 + rng.gen::<f64>() * 0.5));
            if start + step_len > total || step_len == 0 {
                break;
            }

            let mut step = gravel_step(step_len, tb.sample_rate(), rng)?;
            let position = (step_time / duration).clamp(0.0, 1.0);
            let intensity = 0.5 + rng.gen::<f64>() * 0.5;
            scale(&mut step, intensity);
            pan_into(&mut pair, &step, start, position, 1.0 - STEP_ATTENUATION * position)?;

            step_time = next_step_time(step_time, self.steps_per_second, rng.gen::<f64>());
            steps += 1;
        }
        log::debug!("placed {} gravel steps over {:.2} s", steps, duration);
        Ok(SfxOutput::Stereo(pair))
    }
}
