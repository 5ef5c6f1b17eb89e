//! Short fixed-tone impacts: thud and button click.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_common, check_frequency};

/// Low thump: a sub-100 Hz sine under heavily smoothed noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThudParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Body tone frequency in Hz.
    pub base_freq: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for ThudParams {
    fn default() -> Self {
        Self {
            duration: 0.3,
            volume: 0.7,
            base_freq: 80.0,
            cutoff: None,
        }
    }
}

impl ThudParams {
    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_frequency("base_freq", self.base_freq, sample_rate)
    }
}

/// UI click: a high tone plus its octave, gone within a few milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonClickParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Fundamental in Hz; the octave above is mixed in.
    pub base_freq: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for ButtonClickParams {
    fn default() -> Self {
        Self {
            duration: 0.05,
            volume: 0.7,
            base_freq: 3000.0,
            cutoff: None,
        }
    }
}

impl ButtonClickParams {
    /// Validates every field against `sample_rate`.
    ///
    /// The octave partial must also stay below Nyquist.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_frequency("base_freq", self.base_freq, sample_rate)?;
        check_frequency("base_freq (octave partial)", self.base_freq * 2.0, sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thud_defaults_validate() {
        assert!(ThudParams::default().validate(44100).is_ok());
    }

    #[test]
    fn test_thud_partial_json_fills_defaults() {
        let params: ThudParams = serde_json::from_str(r#"{"volume": 0.5}"#).unwrap();
        assert_eq!(params.volume, 0.5);
        assert_eq!(params.duration, 0.3);
        assert_eq!(params.base_freq, 80.0);
    }

    #[test]
    fn test_thud_rejects_unknown_field() {
        let result: Result<ThudParams, _> = serde_json::from_str(r#"{"durration": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_click_octave_must_fit_below_nyquist() {
        let params = ButtonClickParams::default();
        assert!(params.validate(44100).is_ok());
        // 3 kHz fits under 4 kHz Nyquist, its 6 kHz octave does not.
        assert!(params.validate(8000).is_err());
    }
}
