//! Field-level edits of effect parameters by key.
//!
//! Edits go through the JSON representation so every struct gets them for
//! free, and the result is re-deserialized with the same strictness as a
//! document loaded from disk.

use serde_json::{Map, Value};

use crate::effect::EffectParams;
use crate::error::ParamError;
use crate::spec::check_variant_names;

/// Parses an override value: JSON first (numbers, booleans, `null`), falling
/// back to a bare string so `siren_type=yelp` works without quotes.
pub fn parse_override_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Splits a `key=value` override.
///
/// # Example
/// ```
/// use foley_spec::overrides::split_assignment;
///
/// assert_eq!(split_assignment("mode_q=30").unwrap(), ("mode_q", "30"));
/// assert!(split_assignment("mode_q").is_err());
/// ```
pub fn split_assignment(assignment: &str) -> Result<(&str, &str), ParamError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParamError::invalid_param(
            assignment,
            "override must have the form key=value",
        )),
    }
}

/// Returns a copy of `params` with `key` set to `raw_value`.
pub fn apply_override(
    params: &EffectParams,
    key: &str,
    raw_value: &str,
) -> Result<EffectParams, ParamError> {
    if key == "type" {
        return Err(ParamError::invalid_param(
            key,
            "the effect type cannot be overridden; select a different effect instead",
        ));
    }
    let mut object = to_object(params)?;
    object.insert(key.to_string(), parse_override_value(raw_value));
    from_object(object).map_err(|e| match e {
        ParamError::Json(inner) => ParamError::invalid_param(key, inner.to_string()),
        other => other,
    })
}

/// Numeric fields of `params` in serialization order.
///
/// Optional fields that are unset are not listed.
pub fn numeric_fields(params: &EffectParams) -> Result<Vec<(String, f64)>, ParamError> {
    let object = to_object(params)?;
    Ok(object
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|v| (key.clone(), v)))
        .collect())
}

/// Returns a copy of `params` with the given numeric fields replaced.
pub fn with_numeric_fields(
    params: &EffectParams,
    fields: &[(String, f64)],
) -> Result<EffectParams, ParamError> {
    let mut object = to_object(params)?;
    for (key, value) in fields {
        let number = serde_json::Number::from_f64(*value).ok_or_else(|| {
            ParamError::invalid_param(key.as_str(), format!("must be finite, got {}", value))
        })?;
        object.insert(key.clone(), Value::Number(number));
    }
    from_object(object)
}

fn to_object(params: &EffectParams) -> Result<Map<String, Value>, ParamError> {
    match serde_json::to_value(params)? {
        Value::Object(object) => Ok(object),
        other => Err(ParamError::invalid_param(
            "effect",
            format!("expected an object, got {}", other),
        )),
    }
}

fn from_object(object: Map<String, Value>) -> Result<EffectParams, ParamError> {
    let value = Value::Object(object);
    check_variant_names(&value)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectKind;
    use crate::params::{SirenParams, SirenType, ThudParams};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_override_numeric_field() {
        let params = EffectKind::Thud.default_params();
        let updated = apply_override(&params, "base_freq", "120").unwrap();
        assert_eq!(
            updated,
            EffectParams::Thud(ThudParams {
                base_freq: 120.0,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_override_bare_string_and_bool() {
        let params = EffectKind::Siren.default_params();
        let updated = apply_override(&params, "siren_type", "hi_lo").unwrap();
        let updated = apply_override(&updated, "apply_doppler", "false").unwrap();
        assert_eq!(
            updated,
            EffectParams::Siren(SirenParams {
                siren_type: SirenType::HiLo,
                apply_doppler: false,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_override_null_clears_cutoff() {
        let params = EffectKind::Siren.default_params();
        let updated = apply_override(&params, "cutoff", "null").unwrap();
        assert_eq!(updated.cutoff(), None);
    }

    #[test]
    fn test_override_unknown_key_names_it() {
        let params = EffectKind::Thud.default_params();
        let err = apply_override(&params, "bass_boost", "3").unwrap_err();
        assert!(matches!(err, ParamError::InvalidParameter { ref name, .. } if name == "bass_boost"));
    }

    #[test]
    fn test_override_bad_siren_type() {
        let params = EffectKind::Siren.default_params();
        let err = apply_override(&params, "siren_type", "whoop").unwrap_err();
        assert!(matches!(err, ParamError::UnsupportedVariant { .. }));
    }

    #[test]
    fn test_override_type_rejected() {
        let params = EffectKind::Thud.default_params();
        assert!(apply_override(&params, "type", "siren").is_err());
    }

    #[test]
    fn test_numeric_fields_skip_flags_and_unset_options() {
        let params = EffectKind::Siren.default_params();
        let keys: Vec<String> = numeric_fields(&params)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(keys.contains(&"siren_speed".to_string()));
        assert!(keys.contains(&"cutoff".to_string()));
        assert!(!keys.contains(&"apply_doppler".to_string()));
        assert!(!keys.contains(&"freq_low".to_string()));
        assert!(!keys.contains(&"type".to_string()));
    }

    #[test]
    fn test_with_numeric_fields_replaces_values() {
        let params = EffectKind::Thud.default_params();
        let updated =
            with_numeric_fields(&params, &[("duration".to_string(), 0.5)]).unwrap();
        assert_eq!(updated.duration(), 0.5);
        assert_eq!(updated.kind(), EffectKind::Thud);
    }

    #[test]
    fn test_with_numeric_fields_rejects_nan() {
        let params = EffectKind::Thud.default_params();
        assert!(with_numeric_fields(&params, &[("volume".to_string(), f64::NAN)]).is_err());
    }

    #[test]
    fn test_split_assignment_trims() {
        assert_eq!(split_assignment(" cutoff = 3000 ").unwrap(), ("cutoff", "3000"));
        assert!(split_assignment("=3").is_err());
    }
}
