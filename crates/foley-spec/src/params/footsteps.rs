//! Gravel footsteps parameters.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_common, check_range};

/// Time of the first step in seconds.
pub const FIRST_STEP_SECONDS: f64 = 0.5;

/// A walker crunching across gravel, passing from left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GravelFootstepsParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Walking cadence.
    pub steps_per_second: f64,
    /// Mean length of one step sound in seconds (varied by +/-25%).
    pub step_duration: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for GravelFootstepsParams {
    fn default() -> Self {
        Self {
            duration: 6.0,
            volume: 0.7,
            steps_per_second: 2.0,
            step_duration: 0.2,
            cutoff: Some(1500.0),
        }
    }
}

impl GravelFootstepsParams {
    /// Validates every field against `sample_rate`.
    ///
    /// The clip must be long enough to hold the first step at its longest.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_range("steps_per_second", self.steps_per_second, 0.25, 8.0)?;
        check_range("step_duration", self.step_duration, 0.02, 1.0)?;
        let shortest = FIRST_STEP_SECONDS + self.step_duration * 1.25;
        if self.duration <= shortest {
            return Err(ParamError::invalid_param(
                "duration",
                format!(
                    "must exceed {:.3} s to fit the first step, got {}",
                    shortest, self.duration
                ),
            ));
        }
        Ok(())
    }
}
