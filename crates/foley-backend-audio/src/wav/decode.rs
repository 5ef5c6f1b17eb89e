//! WAV decoding for playback.

use std::io::Cursor;

use crate::error::{AudioError, AudioResult};

/// Decoded audio normalized to `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Interleaved samples, frame by frame.
    pub samples: Vec<f32>,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}

/// Decodes a WAV buffer holding 16- or 32-bit integer PCM.
///
/// Integer samples are divided by the signed maximum of their width. Float
/// data and every other width is [`AudioError::UnsupportedFormat`].
pub fn decode_wav(bytes: &[u8]) -> AudioResult<DecodedAudio> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).map_err(hound_error)?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(AudioError::unsupported_format(format!(
            "{}-bit float samples",
            spec.bits_per_sample
        )));
    }
    let scale = match spec.bits_per_sample {
        16 => i16::MAX as f32,
        32 => i32::MAX as f32,
        other => {
            return Err(AudioError::unsupported_format(format!(
                "{}-bit integer samples (expected 16 or 32)",
                other
            )))
        }
    };

    let samples = reader
        .into_samples::<i32>()
        .map(|s| s.map(|v| v as f32 / scale))
        .collect::<Result<Vec<f32>, _>>()
        .map_err(hound_error)?;

    Ok(DecodedAudio {
        samples,
        channels: spec.channels,
        sample_rate: spec.sample_rate,
    })
}

fn hound_error(err: hound::Error) -> AudioError {
    match err {
        hound::Error::IoError(io) => AudioError::Io(io),
        other => AudioError::unsupported_format(other.to_string()),
    }
}
