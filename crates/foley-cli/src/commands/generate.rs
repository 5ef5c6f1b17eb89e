//! Generate command implementation
//!
//! Renders one effect and writes it as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use foley_backend_audio::{generate, write_wav_file, GenerateResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use crate::input::{resolve_spec, SpecSource};

/// Machine-readable result of `foley generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub path: String,
    pub effect: String,
    pub seed: u32,
    pub sample_rate: u32,
    pub channels: u16,
    pub num_samples: usize,
    pub duration_seconds: f64,
    pub pcm_hash: String,
}

impl GenerateOutput {
    fn new(path: &Path, result: &GenerateResult) -> Self {
        Self {
            path: path.display().to_string(),
            effect: result.effect.to_string(),
            seed: result.seed,
            sample_rate: result.wav.sample_rate,
            channels: result.wav.channels,
            num_samples: result.wav.num_samples,
            duration_seconds: result.wav.duration_seconds(),
            pcm_hash: result.wav.pcm_hash.clone(),
        }
    }
}

/// Renders `source` and writes the WAV to `out`, or `<effect>.wav` in the
/// current directory.
pub fn generate_to_file(source: &SpecSource<'_>, out: Option<&str>) -> Result<GenerateOutput> {
    let spec = resolve_spec(source)?;
    let result = generate(&spec)
        .with_context(|| format!("Failed to generate {}", spec.effect.kind()))?;

    let path = match out {
        Some(out) => PathBuf::from(out),
        None => PathBuf::from(format!("{}.wav", result.effect)),
    };
    write_wav_file(&path, &result.wav.wav_data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(GenerateOutput::new(&path, &result))
}

/// Run the generate command
///
/// # Arguments
/// * `source` - Effect name or spec file, with overrides
/// * `out` - Output WAV path (default: `<effect>.wav`)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(source: &SpecSource<'_>, out: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let output = generate_to_file(source, out)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    let layout = if output.channels == 2 { "stereo" } else { "mono" };
    println!("{} {}", "Generated:".cyan().bold(), output.effect);
    println!("  {} {}", "path:".dimmed(), output.path);
    println!(
        "  {} {} samples, {}, {:.3} s @ {} Hz",
        "audio:".dimmed(),
        output.num_samples,
        layout,
        output.duration_seconds,
        output.sample_rate
    );
    println!("  {} {}", "pcm hash:".dimmed(), output.pcm_hash);
    println!(
        "{} in {:.2?}",
        "Done".green().bold(),
        start.elapsed()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foley_backend_audio::decode_wav;

    #[test]
    fn test_generate_writes_requested_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("click.wav");
        let output = generate_to_file(
            &SpecSource {
                effect: Some("button_click"),
                seed: Some(5),
                ..SpecSource::default()
            },
            Some(out.to_str().unwrap()),
        )
        .unwrap();

        assert_eq!(output.effect, "button_click");
        assert_eq!(output.channels, 1);
        assert_eq!(output.num_samples, 2205);
        assert_eq!(output.seed, 5);

        let decoded = decode_wav(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(decoded.frames(), 2205);
    }
}
