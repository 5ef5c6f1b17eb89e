//! Train command implementation
//!
//! Runs the interactive A/B search and prints the winning spec.

use anyhow::{Context, Result};
use colored::Colorize;
use foley_spec::SfxSpec;
use serde::Serialize;
use std::process::ExitCode;

use crate::input::{resolve_spec, SpecSource};
use crate::playback::{Player, SilentPlayer, SystemPlayer};
use crate::trainer::{StdinSelector, Trainer, TrainOutcome};

/// Default directory for attempt files.
pub const DEFAULT_ATTEMPTS_DIR: &str = "attempts";

#[derive(Debug, Serialize)]
struct TrainOutput {
    rounds: usize,
    final_path: Option<String>,
    spec: Option<SfxSpec>,
}

/// Run the train command
///
/// # Arguments
/// * `source` - Starting effect or spec file, with overrides
/// * `attempts_dir` - Directory for `attempt_NN.wav` files
/// * `no_play` - Skip audio playback
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    source: &SpecSource<'_>,
    attempts_dir: Option<&str>,
    no_play: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let spec = resolve_spec(source)?;
    let dir = attempts_dir.unwrap_or(DEFAULT_ATTEMPTS_DIR);

    if !json_output {
        println!("{} {}", "Training:".cyan().bold(), spec.effect.kind());
        println!("{} {}", "Attempts:".dimmed(), dir);
    }

    let outcome = if no_play {
        train(&spec, dir, SilentPlayer)?
    } else {
        let player = SystemPlayer::detect().context("Playback unavailable (use --no-play)")?;
        train(&spec, dir, player)?
    };

    let final_spec = outcome.params.clone().map(|effect| SfxSpec {
        effect,
        ..spec.clone()
    });

    if json_output {
        let output = TrainOutput {
            rounds: outcome.rounds,
            final_path: outcome.final_path.map(|p| p.display().to_string()),
            spec: final_spec,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    match (final_spec, outcome.final_path) {
        (Some(final_spec), Some(path)) => {
            println!(
                "{} {} after {} round(s)",
                "Saved".green().bold(),
                path.display(),
                outcome.rounds
            );
            println!("{}", final_spec.to_json_pretty()?);
        }
        _ => println!("{} nothing saved", "Quit:".yellow().bold()),
    }
    Ok(ExitCode::SUCCESS)
}

fn train<P: Player>(spec: &SfxSpec, dir: &str, player: P) -> Result<TrainOutcome> {
    let mut trainer = Trainer::new(dir, spec.sample_rate, spec.seed, StdinSelector::new(), player);
    trainer.run(spec.effect.clone())
}
