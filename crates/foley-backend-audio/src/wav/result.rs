//! Encoded render ready to be written to disk.

use crate::mixer::{SfxOutput, StereoPair};

use super::format::WavFormat;
use super::pcm::{pcm_hash, samples_to_pcm16, stereo_to_pcm16};
use super::writer::write_wav_to_vec;

/// A finished effect encoded as a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        Self::encode(WavFormat::mono(sample_rate), samples_to_pcm16(samples), samples.len())
    }

    /// Encodes a stereo pair, interleaved.
    pub fn from_stereo(pair: &StereoPair, sample_rate: u32) -> Self {
        Self::encode(WavFormat::stereo(sample_rate), stereo_to_pcm16(pair), pair.len())
    }

    /// Encodes either layout.
    pub fn from_output(output: &SfxOutput, sample_rate: u32) -> Self {
        match output {
            SfxOutput::Mono(samples) => Self::from_mono(samples, sample_rate),
            SfxOutput::Stereo(pair) => Self::from_stereo(pair, sample_rate),
        }
    }

    fn encode(format: WavFormat, pcm: Vec<u8>, num_samples: usize) -> Self {
        Self {
            pcm_hash: pcm_hash(&pcm),
            wav_data: write_wav_to_vec(&format, &pcm),
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_samples,
        }
    }

    /// Returns true for two-channel output.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
