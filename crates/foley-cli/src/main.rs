//! Foley CLI - procedural sound effects from the command line
//!
//! Lists the available effects, renders them to WAV files, plays them back
//! and runs the interactive parameter trainer.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use foley_cli::commands;
use foley_cli::input::SpecSource;

/// Foley - Procedural Sound Effect Synthesis
#[derive(Parser)]
#[command(name = "foley")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every effect with its default parameters
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an effect to a WAV file
    Generate {
        /// Effect name (see `foley list`)
        #[arg(short, long, required_unless_present = "spec")]
        effect: Option<String>,

        /// Path to a JSON spec file
        #[arg(short, long)]
        spec: Option<String>,

        /// Override a parameter, e.g. `--set base_freq=120` (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Random seed
        #[arg(long)]
        seed: Option<u32>,

        /// Output sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Output WAV path (default: <effect>.wav)
        #[arg(short, long)]
        out: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for parameters interactively by A/B listening
    Train {
        /// Effect name (see `foley list`)
        #[arg(short, long)]
        effect: String,

        /// Starting spec file (default: the effect's defaults)
        #[arg(short, long)]
        spec: Option<String>,

        /// Override a starting parameter (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Directory for attempt files
        #[arg(long)]
        attempts_dir: Option<String>,

        /// Random seed
        #[arg(long)]
        seed: Option<u32>,

        /// Output sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Skip audio playback
        #[arg(long)]
        no_play: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a WAV file
    Play {
        /// WAV file to play
        file: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Generate {
            effect,
            spec,
            overrides,
            seed,
            sample_rate,
            out,
            json,
        } => {
            let source = SpecSource {
                effect: effect.as_deref(),
                spec_path: spec.as_deref(),
                overrides: &overrides,
                seed,
                sample_rate,
            };
            commands::generate::run(&source, out.as_deref(), json)
        }
        Commands::Train {
            effect,
            spec,
            overrides,
            attempts_dir,
            seed,
            sample_rate,
            no_play,
            json,
        } => {
            let source = SpecSource {
                effect: Some(effect.as_str()),
                spec_path: spec.as_deref(),
                overrides: &overrides,
                seed,
                sample_rate,
            };
            commands::train::run(&source, attempts_dir.as_deref(), no_play, json)
        }
        Commands::Play { file, json } => commands::play::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_requires_a_source() {
        assert!(Cli::try_parse_from(["foley", "generate"]).is_err());
        let cli = Cli::try_parse_from([
            "foley", "generate", "-e", "thud", "--set", "volume=0.5", "--set", "base_freq=90",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { effect, overrides, .. } => {
                assert_eq!(effect.as_deref(), Some("thud"));
                assert_eq!(overrides, vec!["volume=0.5", "base_freq=90"]);
            }
            _ => panic!("expected generate"),
        }
    }
}
