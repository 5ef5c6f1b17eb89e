//! Core output types.

/// Two same-length channels.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoPair {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoPair {
    /// Creates a silent pair of `num_samples` per channel.
    pub fn silent(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Creates interleaved stereo samples.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Finished or raw output of an effect.
#[derive(Debug, Clone, PartialEq)]
pub enum SfxOutput {
    /// One channel.
    Mono(Vec<f64>),
    /// Left and right channels.
    Stereo(StereoPair),
}

impl SfxOutput {
    /// Returns true if this is stereo output.
    pub fn is_stereo(&self) -> bool {
        matches!(self, SfxOutput::Stereo(_))
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        if self.is_stereo() {
            2
        } else {
            1
        }
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        match self {
            SfxOutput::Mono(samples) => samples.len(),
            SfxOutput::Stereo(pair) => pair.len(),
        }
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest absolute sample over all channels.
    pub fn peak(&self) -> f64 {
        match self {
            SfxOutput::Mono(samples) => crate::signal::peak(samples),
            SfxOutput::Stereo(pair) => {
                crate::signal::peak(&pair.left).max(crate::signal::peak(&pair.right))
            }
        }
    }
}
