//! Explosion parameters.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_common, check_range};

/// Rumble fundamental in Hz.
pub const RUMBLE_HZ: f64 = 50.0;

/// Rumble overtone as a multiple of [`RUMBLE_HZ`]; the highest fixed tone.
pub const RUMBLE_OVERTONE: f64 = 1.5;

/// Layered rumble and noise with a held peak and a saturating limiter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplosionParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Drive into the `tanh` limiter; 1.5 is a firm squash.
    pub drive: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self {
            duration: 2.0,
            volume: 0.7,
            drive: 1.5,
            cutoff: None,
        }
    }
}

impl ExplosionParams {
    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        let overtone = RUMBLE_HZ * RUMBLE_OVERTONE;
        if overtone >= sample_rate as f64 / 2.0 {
            return Err(ParamError::invalid_param(
                "sample_rate",
                format!(
                    "must be above {} Hz to carry the {} Hz rumble, got {}",
                    overtone * 2.0,
                    overtone,
                    sample_rate
                ),
            ));
        }
        check_range("drive", self.drive, 0.1, 10.0)
    }
}
