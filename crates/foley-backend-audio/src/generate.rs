//! Main entry point for effect generation.
//!
//! Takes a validated [`SfxSpec`] and renders it to a WAV buffer
//! deterministically: the same spec always yields the same PCM hash.

use foley_spec::{EffectKind, EffectParams, SfxSpec};
use rand_pcg::Pcg32;

use crate::error::AudioResult;
use crate::mixer::{finish, SfxOutput};
use crate::rng::create_rng;
use crate::sfx::Effect;
use crate::signal::TimeBase;
use crate::wav::WavResult;

/// Result of effect generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Encoded WAV file.
    pub wav: WavResult,
    /// Which effect was rendered.
    pub effect: EffectKind,
    /// Seed the render used.
    pub seed: u32,
}

/// Synthesizes `params` over `tb` and runs the finishing stage.
///
/// Parameters are assumed valid; use [`render`] for the checked path.
pub fn synthesize_finished(params: &EffectParams, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
    let raw = params.synthesize(tb, rng)?;
    match &raw {
        SfxOutput::Mono(samples) => tb.check_len(samples)?,
        SfxOutput::Stereo(pair) => {
            tb.check_len(&pair.left)?;
            tb.check_len(&pair.right)?;
        }
    }
    finish(raw, params.volume(), params.cutoff(), tb.sample_rate_f64())
}

/// Validates and renders one effect to finished samples.
pub fn render(params: &EffectParams, sample_rate: u32, seed: u32) -> AudioResult<SfxOutput> {
    params.validate(sample_rate)?;
    let tb = TimeBase::new(params.duration(), sample_rate)?;
    log::debug!(
        "rendering {} ({} samples @ {} Hz, seed {})",
        params.kind(),
        tb.len(),
        sample_rate,
        seed
    );
    let mut rng = create_rng(seed);
    synthesize_finished(params, &tb, &mut rng)
}

/// Generates a WAV file from a spec.
pub fn generate(spec: &SfxSpec) -> AudioResult<GenerateResult> {
    spec.validate()?;
    let output = render(&spec.effect, spec.sample_rate, spec.seed)?;
    let wav = WavResult::from_output(&output, spec.sample_rate);
    log::debug!(
        "{}: {} channel(s), pcm hash {}",
        spec.effect.kind(),
        wav.channels,
        wav.pcm_hash
    );
    Ok(GenerateResult {
        wav,
        effect: spec.effect.kind(),
        seed: spec.seed,
    })
}
