//! WAV header parameters.

/// Bits per sample of every file this crate writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Header parameters of a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// 16-bit PCM with `channels` interleaved channels.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// 16-bit mono.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm16(1, sample_rate)
    }

    /// 16-bit stereo.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::pcm16(2, sample_rate)
    }

    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame (one sample for every channel).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
