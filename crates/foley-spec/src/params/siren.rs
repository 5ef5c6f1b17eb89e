//! Siren parameters and siren type.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::{check_band, check_common, check_frequency, check_range};

use super::{check_doppler, doppler_headroom, HIGHEST_PARTIAL};

/// Siren pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SirenType {
    /// Continuous sweep between the band edges.
    #[default]
    Wail,
    /// Two alternating tones with a softened switch.
    HiLo,
    /// Rapid phase-flipped single tone.
    Yelp,
}

impl SirenType {
    /// Returns the type as its snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SirenType::Wail => "wail",
            SirenType::HiLo => "hi_lo",
            SirenType::Yelp => "yelp",
        }
    }

    /// Returns every siren type.
    pub fn all() -> &'static [SirenType] {
        &[SirenType::Wail, SirenType::HiLo, SirenType::Yelp]
    }

    /// Highest harmonic of the carrier this pattern renders.
    pub fn highest_partial(&self) -> f64 {
        match self {
            SirenType::Wail => HIGHEST_PARTIAL,
            SirenType::HiLo | SirenType::Yelp => 1.0,
        }
    }

    /// Default (low, high) band for this pattern in Hz.
    pub fn default_band(&self) -> (f64, f64) {
        match self {
            SirenType::Wail => (800.0, 1200.0),
            SirenType::HiLo => (400.0, 800.0),
            SirenType::Yelp => (600.0, 600.0),
        }
    }
}

impl std::fmt::Display for SirenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SirenType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SirenType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = SirenType::all().iter().map(|t| t.as_str()).collect();
                ParamError::unsupported_variant("siren_type", s, &names)
            })
    }
}

/// Emergency siren passing the listener from left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SirenParams {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output peak amplitude (0.0 to 1.0).
    pub volume: f64,
    /// Pattern.
    pub siren_type: SirenType,
    /// Lower band edge in Hz; defaults per pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_low: Option<f64>,
    /// Upper band edge in Hz; defaults per pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_high: Option<f64>,
    /// Pattern cycles per second (yelp runs at twice this).
    pub siren_speed: f64,
    /// Shift the carrier by the pass-by radial velocity.
    pub apply_doppler: bool,
    /// Peak radial velocity in m/s.
    pub doppler_velocity: f64,
    /// Optional smoothing low-pass in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Default for SirenParams {
    fn default() -> Self {
        Self {
            duration: 5.0,
            volume: 0.7,
            siren_type: SirenType::Wail,
            freq_low: None,
            freq_high: None,
            siren_speed: 2.5,
            apply_doppler: true,
            doppler_velocity: 30.0,
            cutoff: Some(4000.0),
        }
    }
}

impl SirenParams {
    /// Resolved (low, high) band in Hz.
    pub fn band(&self) -> (f64, f64) {
        let (low, high) = self.siren_type.default_band();
        (self.freq_low.unwrap_or(low), self.freq_high.unwrap_or(high))
    }

    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        check_common(self.duration, self.volume, self.cutoff, sample_rate)?;
        let (low, high) = self.band();
        check_band("freq_low", low, "freq_high", high, sample_rate)?;
        check_range("siren_speed", self.siren_speed, 0.01, 50.0)?;
        let mut top = high;
        if self.apply_doppler {
            check_doppler(self.doppler_velocity)?;
            top *= doppler_headroom(self.doppler_velocity);
            check_band("freq_low", low, "freq_high (Doppler-shifted)", top, sample_rate)?;
        }
        let partial = self.siren_type.highest_partial();
        if partial > 1.0 {
            check_frequency("freq_high (3rd partial)", top * partial, sample_rate)?;
        }
        Ok(())
    }
}
