//! Hinge creak parameters (stick-slip exciter into a modal bank).

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_band, check_common, check_frequency, check_range};

use super::HIGHEST_PARTIAL;

/// Squeal fundamental relative to `mode1_hz`.
pub const SQUEAL_RATIO: f64 = 0.5;

/// Largest upward excursion of the squeal pitch: the +10% walk plus the
/// +50% glide.
pub const SQUEAL_HEADROOM: f64 = 1.6;

/// Metal-on-metal hinge creak.
///
/// Documented ranges:
///
/// | field               | range      |
/// |---------------------|------------|
/// | `burst_rate_hz`     | 3-12       |
/// | `burst_duration_ms` | 20-120     |
/// | `mode_q`            | 10-60      |
/// | `glide_rate_oct`    | 0.2-1.5    |
/// | `noise_to_tone_db`  | 3-15       |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HingeCreakParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Mean stick-slip events per second.
    pub burst_rate_hz: f64,
    /// Nominal length of one friction burst in milliseconds.
    pub burst_duration_ms: f64,
    /// Lower edge of the friction noise band in Hz.
    pub noise_band_low_hz: f64,
    /// Upper edge of the friction noise band in Hz.
    pub noise_band_high_hz: f64,
    /// First resonant mode in Hz; the tonal layer sits an octave below it.
    pub mode1_hz: f64,
    /// Second resonant mode in Hz.
    pub mode2_hz: f64,
    /// Third resonant mode in Hz.
    pub mode3_hz: f64,
    /// Resonator quality factor shared by all modes.
    #[serde(alias = "mode_Q")]
    pub mode_q: f64,
    /// How far the tone glides up while friction builds.
    pub glide_rate_oct: f64,
    /// Noise level over tone level in dB (higher is rustier).
    pub noise_to_tone_db: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for HingeCreakParams {
    fn default() -> Self {
        Self {
            duration: 2.5,
            volume: 0.7,
            burst_rate_hz: 6.0,
            burst_duration_ms: 60.0,
            noise_band_low_hz: 500.0,
            noise_band_high_hz: 6000.0,
            mode1_hz: 950.0,
            mode2_hz: 2200.0,
            mode3_hz: 3800.0,
            mode_q: 25.0,
            glide_rate_oct: 0.5,
            noise_to_tone_db: 8.0,
            cutoff: None,
        }
    }
}

impl HingeCreakParams {
    /// Mode centres in bank order.
    pub fn modes(&self) -> [f64; 3] {
        [self.mode1_hz, self.mode2_hz, self.mode3_hz]
    }

    /// Resting squeal pitch in Hz.
    pub fn squeal_base(&self) -> f64 {
        self.mode1_hz * SQUEAL_RATIO
    }

    /// Highest pitch the squeal can glide to, in Hz.
    pub fn squeal_peak(&self) -> f64 {
        self.squeal_base() * SQUEAL_HEADROOM
    }

    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_range("burst_rate_hz", self.burst_rate_hz, 3.0, 12.0)?;
        check_range("burst_duration_ms", self.burst_duration_ms, 20.0, 120.0)?;
        check_band(
            "noise_band_low_hz",
            self.noise_band_low_hz,
            "noise_band_high_hz",
            self.noise_band_high_hz,
            sample_rate,
        )?;
        check_frequency("mode1_hz", self.mode1_hz, sample_rate)?;
        check_frequency("mode2_hz", self.mode2_hz, sample_rate)?;
        check_frequency("mode3_hz", self.mode3_hz, sample_rate)?;
        check_frequency(
            "mode1_hz (squeal 3rd partial)",
            self.squeal_peak() * HIGHEST_PARTIAL,
            sample_rate,
        )?;
        check_range("mode_q", self.mode_q, 10.0, 60.0)?;
        check_range("glide_rate_oct", self.glide_rate_oct, 0.2, 1.5)?;
        check_range("noise_to_tone_db", self.noise_to_tone_db, 3.0, 15.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hinge_defaults_validate() {
        let params = HingeCreakParams::default();
        assert!(params.validate(44100).is_ok());
        assert_eq!(params.modes(), [950.0, 2200.0, 3800.0]);
    }

    #[test]
    fn test_hinge_accepts_upper_case_q_alias() {
        let params: HingeCreakParams = serde_json::from_str(r#"{"mode_Q": 40}"#).unwrap();
        assert_eq!(params.mode_q, 40.0);
    }

    #[test]
    fn test_hinge_range_violations() {
        let cases = [
            HingeCreakParams {
                mode_q: 5.0,
                ..Default::default()
            },
            HingeCreakParams {
                burst_rate_hz: 20.0,
                ..Default::default()
            },
            HingeCreakParams {
                burst_duration_ms: 10.0,
                ..Default::default()
            },
            HingeCreakParams {
                glide_rate_oct: 2.0,
                ..Default::default()
            },
            HingeCreakParams {
                noise_to_tone_db: 1.0,
                ..Default::default()
            },
            HingeCreakParams {
                noise_band_low_hz: 7000.0,
                ..Default::default()
            },
        ];
        for params in cases {
            assert!(params.validate(44100).is_err(), "{:?} should fail", params);
        }
    }

    #[test]
    fn test_hinge_mode_above_nyquist() {
        let params = HingeCreakParams {
            mode3_hz: 12000.0,
            ..Default::default()
        };
        let err = params.validate(22050).unwrap_err();
        assert!(err.to_string().contains("mode3_hz"));
    }

    #[test]
    fn test_hinge_squeal_partials_checked_against_nyquist() {
        let params = HingeCreakParams {
            mode1_hz: 8000.0,
            ..Default::default()
        };
        assert!((params.squeal_peak() - 6400.0).abs() < 1e-9);
        // 19.2 kHz top partial fits at 44.1 kHz but not at 32 kHz, where
        // the mode itself is still below Nyquist.
        assert!(params.validate(44100).is_ok());
        let err = params.validate(32000).unwrap_err();
        assert!(err.to_string().contains("squeal 3rd partial"), "{}", err);

        let extreme = HingeCreakParams {
            mode1_hz: 20000.0,
            ..Default::default()
        };
        assert!(extreme.validate(44100).is_err());
    }
}
