//! The top-level effect document.

use serde::{Deserialize, Serialize};

use crate::effect::{EffectKind, EffectParams};
use crate::error::ParamError;
use crate::params::SirenType;
use crate::validation::check_sample_rate;

/// Sample rate used when a document does not name one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// A complete, self-contained request for one sound effect.
///
/// # Example
/// ```
/// use foley_spec::{EffectKind, SfxSpec};
///
/// let spec = SfxSpec::from_json(r#"{ "seed": 7, "effect": { "type": "thud" } }"#).unwrap();
/// assert_eq!(spec.effect.kind(), EffectKind::Thud);
/// assert_eq!(spec.sample_rate, 44100);
/// spec.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SfxSpec {
    /// Seed for every random draw made while rendering.
    #[serde(default)]
    pub seed: u32,
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Which effect to render and how.
    pub effect: EffectParams,
}

impl SfxSpec {
    /// Creates a spec with the default sample rate.
    pub fn new(effect: EffectParams, seed: u32) -> Self {
        Self {
            seed,
            sample_rate: DEFAULT_SAMPLE_RATE,
            effect,
        }
    }

    /// Creates a spec holding the default parameters of `kind`.
    pub fn with_defaults(kind: EffectKind, seed: u32) -> Self {
        Self::new(kind.default_params(), seed)
    }

    /// Parses a spec from a JSON string.
    ///
    /// Unknown effect or siren type names are reported as
    /// [`ParamError::UnsupportedVariant`] rather than a generic parse error.
    pub fn from_json(json: &str) -> Result<Self, ParamError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parses a spec from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParamError> {
        if let Some(effect) = value.get("effect") {
            check_variant_names(effect)?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ParamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the sample rate and every effect field.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_sample_rate(self.sample_rate)?;
        self.effect.validate(self.sample_rate)
    }
}

/// Rejects unknown discrete names inside an effect object up front.
pub(crate) fn check_variant_names(effect: &serde_json::Value) -> Result<(), ParamError> {
    if let Some(name) = effect.get("type").and_then(|v| v.as_str()) {
        name.parse::<EffectKind>()?;
    }
    if let Some(name) = effect.get("siren_type").and_then(|v| v.as_str()) {
        name.parse::<SirenType>()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HingeCreakParams, SirenParams};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_spec_defaults() {
        let spec = SfxSpec::from_json(r#"{"effect": {"type": "hinge_creak"}}"#).unwrap();
        assert_eq!(spec.seed, 0);
        assert_eq!(spec.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(spec.effect, EffectParams::HingeCreak(HingeCreakParams::default()));
    }

    #[test]
    fn test_mode_q_alias_accepted() {
        let spec = SfxSpec::from_json(
            r#"{"effect": {"type": "hinge_creak", "mode_Q": 40, "burst_rate_hz": 8}}"#,
        )
        .unwrap();
        match spec.effect {
            EffectParams::HingeCreak(p) => {
                assert_eq!(p.mode_q, 40.0);
                assert_eq!(p.burst_rate_hz, 8.0);
            }
            other => panic!("wrong effect: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_effect_is_unsupported_variant() {
        let err = SfxSpec::from_json(r#"{"effect": {"type": "laser"}}"#).unwrap_err();
        assert!(matches!(err, ParamError::UnsupportedVariant { kind: "effect", .. }));
    }

    #[test]
    fn test_unknown_siren_type_is_unsupported_variant() {
        let err = SfxSpec::from_json(r#"{"effect": {"type": "siren", "siren_type": "whoop"}}"#)
            .unwrap_err();
        match err {
            ParamError::UnsupportedVariant { kind, value, .. } => {
                assert_eq!(kind, "siren_type");
                assert_eq!(value, "whoop");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_field_is_json_error() {
        let err = SfxSpec::from_json(r#"{"effect": {"type": "thud", "bass": 3}}"#).unwrap_err();
        assert!(matches!(err, ParamError::Json(_)));
    }

    #[test]
    fn test_missing_effect_is_json_error() {
        let err = SfxSpec::from_json(r#"{"seed": 3}"#).unwrap_err();
        assert!(matches!(err, ParamError::Json(_)));
    }

    #[test]
    fn test_validate_checks_sample_rate_first() {
        let mut spec = SfxSpec::with_defaults(EffectKind::Thud, 1);
        spec.sample_rate = 0;
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("sample_rate"));
    }

    #[test]
    fn test_json_round_trip_preserves_spec() {
        let spec = SfxSpec {
            seed: 42,
            sample_rate: 48000,
            effect: EffectParams::Siren(SirenParams {
                siren_type: SirenType::Yelp,
                ..Default::default()
            }),
        };
        let json = spec.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"siren\""));
        assert!(json.contains("\"siren_type\": \"yelp\""));
        assert_eq!(SfxSpec::from_json(&json).unwrap(), spec);
    }
}
