//! Flying saucer parameters.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_band, check_common, check_frequency};

use super::{check_doppler, doppler_headroom, HIGHEST_PARTIAL};

/// Hovering UFO hum drifting across the stereo field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlyingSaucerParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Carrier floor in Hz.
    pub freq_low: f64,
    /// Carrier reference ceiling in Hz; the sweep can overshoot it.
    pub freq_high: f64,
    /// Shift the carrier by the pass-by radial velocity.
    pub apply_doppler: bool,
    /// Peak radial velocity in m/s.
    pub doppler_velocity: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for FlyingSaucerParams {
    fn default() -> Self {
        Self {
            duration: 5.0,
            volume: 0.7,
            freq_low: 200.0,
            freq_high: 800.0,
            apply_doppler: true,
            doppler_velocity: 30.0,
            cutoff: Some(8000.0),
        }
    }
}

impl FlyingSaucerParams {
    /// Highest carrier frequency the sweep reaches before Doppler, in Hz.
    ///
    /// The three sweep weights sum to 2, so the track peaks at
    /// `low + 2 * (high - low)`.
    pub fn sweep_peak(&self) -> f64 {
        self.freq_low + 2.0 * (self.freq_high - self.freq_low)
    }

    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        check_band("freq_low", self.freq_low, "freq_high", self.freq_high, sample_rate)?;
        let mut top = self.sweep_peak();
        if self.apply_doppler {
            check_doppler(self.doppler_velocity)?;
            top *= doppler_headroom(self.doppler_velocity);
        }
        check_band("freq_low", self.freq_low, "freq_high (sweep peak)", top, sample_rate)?;
        check_frequency("freq_high (3rd partial of sweep peak)", top * HIGHEST_PARTIAL, sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saucer_defaults_validate() {
        let params = FlyingSaucerParams::default();
        assert_eq!(params.sweep_peak(), 1400.0);
        assert!(params.validate(44100).is_ok());
    }

    #[test]
    fn test_saucer_sweep_peak_checked_against_nyquist() {
        let params = FlyingSaucerParams {
            freq_low: 1000.0,
            freq_high: 3000.0,
            apply_doppler: false,
            cutoff: None,
            ..Default::default()
        };
        assert!(FlyingSaucerParams { freq_high: 1500.0, ..params.clone() }.validate(16000).is_ok());
        // Peak 5000 Hz is above the 4 kHz Nyquist of 8 kHz audio.
        let err = params.validate(8000).unwrap_err();
        assert!(err.to_string().contains("sweep peak"), "{}", err);
    }

    #[test]
    fn test_saucer_partials_checked_against_nyquist() {
        let params = FlyingSaucerParams {
            freq_low: 3000.0,
            freq_high: 5000.0,
            apply_doppler: false,
            cutoff: None,
            ..Default::default()
        };
        // Sweep peak 7000 Hz, 3rd partial 21000 Hz.
        assert!(params.validate(48000).is_ok());
        let err = params.validate(40000).unwrap_err();
        assert!(err.to_string().contains("3rd partial"), "{}", err);
    }

    #[test]
    fn test_saucer_rejects_supersonic_velocity() {
        let params = FlyingSaucerParams {
            doppler_velocity: 400.0,
            ..Default::default()
        };
        assert!(params.validate(44100).is_err());
    }
}
