//! Play command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use foley_backend_audio::decode_wav;
use serde_json::json;
use std::fs;
use std::process::ExitCode;

use crate::playback::{Player, SystemPlayer};

/// Run the play command
///
/// # Arguments
/// * `path` - WAV file to play
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path))?;
    let audio = decode_wav(&bytes).with_context(|| format!("Failed to decode {}", path))?;
    let player = SystemPlayer::detect()?;

    if !json_output {
        println!(
            "{} {} ({} ch, {:.2} s)",
            "Playing:".cyan().bold(),
            path,
            audio.channels,
            audio.duration_seconds()
        );
    }
    player.play(&audio)?;

    if json_output {
        let output = json!({
            "path": path,
            "player": player.program().display().to_string(),
            "channels": audio.channels,
            "sample_rate": audio.sample_rate,
            "duration_seconds": audio.duration_seconds(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(ExitCode::SUCCESS)
}
