//! Door creak and wind whistle: two tunings of the same wobbling friction voice.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_common, check_frequency, check_range};

/// Slow, groaning door creak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoorCreakParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Centre of the wobbling pitch track in Hz.
    pub base_freq: f64,
    /// Stick events per second (each a held pitch jump).
    pub stick_rate: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for DoorCreakParams {
    fn default() -> Self {
        Self {
            duration: 3.0,
            volume: 0.7,
            base_freq: 800.0,
            stick_rate: 1.5,
            cutoff: Some(2000.0),
        }
    }
}

impl DoorCreakParams {
    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_frequency("base_freq", self.base_freq, sample_rate)?;
        check_range("stick_rate", self.stick_rate, 0.0, 20.0)
    }
}

/// Airy whistle through a gap: faster, shallower wobble than the door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Centre of the whistle pitch in Hz.
    pub base_freq: f64,
    /// Stick events per second (each a held pitch jump).
    pub stick_rate: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for WindParams {
    fn default() -> Self {
        Self {
            duration: 5.0,
            volume: 0.7,
            base_freq: 700.0,
            stick_rate: 1.5,
            cutoff: Some(2000.0),
        }
    }
}

impl WindParams {
    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_frequency("base_freq", self.base_freq, sample_rate)?;
        check_range("stick_rate", self.stick_rate, 0.0, 20.0)
    }
}
