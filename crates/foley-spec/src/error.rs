//! Error types for effect parameter parsing and validation.

use thiserror::Error;

/// Common trait for errors that carry a stable reporting code.
///
/// Implemented by the parameter errors here and by the synthesis backend's
/// error type, so front ends can print `[CODE] message` without knowing which
/// layer failed.
pub trait CodedError: std::error::Error {
    /// Stable code such as "PARAM_001" or "AUDIO_004".
    fn code(&self) -> &'static str;

    /// Human-readable message, usually the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping ("params", "audio").
    fn category(&self) -> &'static str;
}

/// Errors raised while building or validating effect parameters.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A numeric parameter is outside its documented range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// A discrete parameter names a variant that does not exist.
    #[error("unsupported {kind} '{value}' (expected one of: {expected})")]
    UnsupportedVariant {
        /// Which discrete parameter ("effect", "siren_type").
        kind: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },

    /// The parameter document could not be parsed.
    #[error("malformed parameters: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported variant error listing the accepted values.
    pub fn unsupported_variant(kind: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnsupportedVariant {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

impl CodedError for ParamError {
    fn code(&self) -> &'static str {
        match self {
            ParamError::InvalidParameter { .. } => "PARAM_001",
            ParamError::UnsupportedVariant { .. } => "PARAM_002",
            ParamError::Json(_) => "PARAM_003",
        }
    }

    fn category(&self) -> &'static str {
        "params"
    }
}
