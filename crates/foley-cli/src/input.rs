//! Builds the spec a command runs from: a JSON file, an effect name, or both,
//! with `--set key=value` overrides applied on top.

use anyhow::{bail, Context, Result};
use foley_spec::overrides::{apply_override, split_assignment};
use foley_spec::{EffectKind, SfxSpec};
use std::fs;
use std::path::Path;

/// Where a command's spec comes from, plus command-line adjustments.
#[derive(Debug, Clone, Default)]
pub struct SpecSource<'a> {
    /// Effect name (`thud`, `siren`, ...).
    pub effect: Option<&'a str>,
    /// Path to a JSON spec file.
    pub spec_path: Option<&'a str>,
    /// `key=value` field overrides.
    pub overrides: &'a [String],
    /// Seed replacing the spec's.
    pub seed: Option<u32>,
    /// Sample rate replacing the spec's.
    pub sample_rate: Option<u32>,
}

/// Loads and parses a JSON spec file.
pub fn load_spec(path: &Path) -> Result<SfxSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
    SfxSpec::from_json(&content)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))
}

/// Resolves a [`SpecSource`] into a validated spec.
///
/// With both an effect name and a spec file, the file's effect must match
/// the name.
pub fn resolve_spec(source: &SpecSource<'_>) -> Result<SfxSpec> {
    let kind = source
        .effect
        .map(|name| name.parse::<EffectKind>())
        .transpose()?;

    let mut spec = match (source.spec_path, kind) {
        (Some(path), kind) => {
            let spec = load_spec(Path::new(path))?;
            if let Some(kind) = kind {
                if spec.effect.kind() != kind {
                    bail!(
                        "spec file {} describes '{}', not '{}'",
                        path,
                        spec.effect.kind(),
                        kind
                    );
                }
            }
            spec
        }
        (None, Some(kind)) => SfxSpec::with_defaults(kind, 0),
        (None, None) => bail!("either --effect or --spec is required"),
    };

    for assignment in source.overrides {
        let (key, value) = split_assignment(assignment)?;
        spec.effect = apply_override(&spec.effect, key, value)
            .with_context(|| format!("Failed to apply override: {}", assignment))?;
    }
    if let Some(seed) = source.seed {
        spec.seed = seed;
    }
    if let Some(sample_rate) = source.sample_rate {
        spec.sample_rate = sample_rate;
    }

    spec.validate()?;
    Ok(spec)
}
