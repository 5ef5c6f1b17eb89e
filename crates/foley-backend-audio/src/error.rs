//! Error types for the synthesis backend.

use foley_spec::{CodedError, ParamError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while synthesizing, encoding, or decoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Parameter document failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Frequency outside `(0, sample_rate / 2)`.
    #[error("invalid frequency: {freq} Hz (sample rate {sample_rate})")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
        /// Sample rate it was checked against.
        sample_rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A buffer that must carry signal is silent or non-finite.
    #[error("invalid signal: {message}")]
    InvalidSignal {
        /// What is wrong with the signal.
        message: String,
    },

    /// Two signals combined sample-by-sample differ in length.
    #[error("signal length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Length of the time base.
        expected: usize,
        /// Length of the offending signal.
        actual: usize,
    },

    /// Audio data uses a sample format that cannot be decoded.
    #[error("unsupported audio format: {message}")]
    UnsupportedFormat {
        /// Description of the format.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid signal error.
    pub fn invalid_signal(message: impl Into<String>) -> Self {
        Self::InvalidSignal {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }
}

impl CodedError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Param(inner) => inner.code(),
            AudioError::InvalidDuration { .. } => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::InvalidFrequency { .. } => "AUDIO_003",
            AudioError::InvalidParameter { .. } => "AUDIO_004",
            AudioError::InvalidSignal { .. } => "AUDIO_005",
            AudioError::LengthMismatch { .. } => "AUDIO_006",
            AudioError::UnsupportedFormat { .. } => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Param(inner) => inner.category(),
            _ => "audio",
        }
    }
}
