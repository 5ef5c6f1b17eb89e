//! List command implementation
//!
//! Prints every effect with its default parameters.

use anyhow::Result;
use colored::Colorize;
use foley_spec::EffectKind;
use serde::Serialize;
use serde_json::{Map, Value};
use std::process::ExitCode;

/// One effect in `foley list --json`.
#[derive(Debug, Serialize)]
pub struct EffectInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub stereo: bool,
    pub defaults: Map<String, Value>,
}

/// Collects the listing for every effect.
pub fn effect_infos() -> Result<Vec<EffectInfo>> {
    EffectKind::all()
        .iter()
        .map(|kind| {
            let mut defaults = match serde_json::to_value(kind.default_params())? {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            defaults.remove("type");
            Ok(EffectInfo {
                name: kind.as_str(),
                description: kind.description(),
                stereo: kind.is_stereo(),
                defaults,
            })
        })
        .collect()
}

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = effect_infos()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(ExitCode::SUCCESS);
    }

    for info in &infos {
        let channels = if info.stereo { "stereo" } else { "mono" };
        println!(
            "{} {} {}",
            info.name.cyan().bold(),
            format!("({})", channels).dimmed(),
            info.description
        );
        for (field, value) in &info.defaults {
            println!("    {} = {}", field, value.to_string().dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_effect_listed_without_tag() {
        let infos = effect_infos().unwrap();
        assert_eq!(infos.len(), EffectKind::all().len());
        let siren = infos.iter().find(|i| i.name == "siren").unwrap();
        assert!(siren.stereo);
        assert!(!siren.defaults.contains_key("type"));
        assert_eq!(siren.defaults["siren_type"], "wail");
    }
}
