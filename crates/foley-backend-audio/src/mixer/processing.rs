//! Normalization, saturation and the shared finishing pipeline.

use crate::error::{AudioError, AudioResult};
use crate::noise::low_pass;
use crate::signal::{peak, scale};

use super::types::{SfxOutput, StereoPair};

/// Scales `samples` so their peak equals `target`.
///
/// Silent buffers are left untouched. Returns the peak measured before
/// scaling.
pub fn normalize(samples: &mut [f64], target: f64) -> f64 {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        scale(samples, target / current_peak);
    }
    current_peak
}

/// `tanh(drive·x) / tanh(drive)`: unity at ±1, compressed in between.
#[inline]
pub fn tanh_limit(sample: f64, drive: f64) -> f64 {
    (drive * sample).tanh() / drive.tanh()
}

/// Applies [`tanh_limit`] to a buffer.
pub fn tanh_limit_buffer(samples: &mut [f64], drive: f64) {
    for sample in samples.iter_mut() {
        *sample = tanh_limit(*sample, drive);
    }
}

/// Normalize to `volume`, optionally low-pass at `cutoff`, normalize again.
///
/// Fails with [`AudioError::InvalidSignal`] when the input is silent or
/// contains non-finite samples, and with [`AudioError::InvalidFrequency`] when
/// `cutoff` is not below Nyquist.
pub fn finish_mono(
    mut samples: Vec<f64>,
    volume: f64,
    cutoff: Option<f64>,
    sample_rate: f64,
) -> AudioResult<Vec<f64>> {
    check_signal(&samples)?;
    normalize(&mut samples, volume);
    if let Some(cutoff) = cutoff {
        check_cutoff(cutoff, sample_rate)?;
        samples = low_pass(&samples, cutoff, sample_rate);
        normalize(&mut samples, volume);
    }
    Ok(samples)
}

/// [`finish_mono`] per channel.
///
/// Each channel is normalized on its own, so a channel that is silent
/// throughout fails the whole pair.
pub fn finish_stereo(
    pair: StereoPair,
    volume: f64,
    cutoff: Option<f64>,
    sample_rate: f64,
) -> AudioResult<StereoPair> {
    Ok(StereoPair {
        left: finish_mono(pair.left, volume, cutoff, sample_rate)?,
        right: finish_mono(pair.right, volume, cutoff, sample_rate)?,
    })
}

/// Runs the finishing pipeline on either layout.
pub fn finish(
    output: SfxOutput,
    volume: f64,
    cutoff: Option<f64>,
    sample_rate: f64,
) -> AudioResult<SfxOutput> {
    Ok(match output {
        SfxOutput::Mono(samples) => SfxOutput::Mono(finish_mono(samples, volume, cutoff, sample_rate)?),
        SfxOutput::Stereo(pair) => SfxOutput::Stereo(finish_stereo(pair, volume, cutoff, sample_rate)?),
    })
}

fn check_cutoff(cutoff: f64, sample_rate: f64) -> AudioResult<()> {
    if !(cutoff > 0.0 && cutoff < sample_rate / 2.0) {
        return Err(AudioError::InvalidFrequency {
            freq: cutoff,
            sample_rate: sample_rate as u32,
        });
    }
    Ok(())
}

fn check_signal(samples: &[f64]) -> AudioResult<()> {
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(AudioError::invalid_signal("signal contains non-finite samples"));
    }
    if peak(samples) == 0.0 {
        log::warn!("refusing to normalize a silent buffer of {} samples", samples.len());
        return Err(AudioError::invalid_signal("signal is silent; nothing to normalize"));
    }
    Ok(())
}
