//! Interactive parameter search.
//!
//! Each round renders the current best parameters (attempt A) and a random
//! variant of them (attempt B), plays both and asks a [`Selector`] which one
//! wins. Declining both narrows the variant spread and tries again.

use anyhow::{Context, Result};
use foley_backend_audio::rng::{create_component_rng, derive_component_seed};
use foley_backend_audio::{decode_wav, render, write_wav_file, WavResult};
use foley_spec::overrides::{numeric_fields, with_numeric_fields};
use foley_spec::EffectParams;
use rand::Rng;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::playback::Player;

/// Relative spread of the first variant.
pub const INITIAL_SPREAD: f64 = 0.3;
/// Factor applied to the spread after each "try again".
pub const SPREAD_DECAY: f64 = 0.7;
/// Smallest spread the search narrows to.
pub const MIN_SPREAD: f64 = 0.02;
/// Draws per round before falling back to the current parameters.
pub const MAX_VARIANT_DRAWS: usize = 8;

/// A listener's verdict on one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Finish with attempt A.
    KeepCurrent,
    /// Finish with attempt B.
    AcceptVariant,
    /// Neither; narrow the spread and propose a new variant.
    TryAgain,
    /// Stop without saving.
    Quit,
}

impl Choice {
    /// Parses one line of selector input: `0`, `1`, `2` or `q`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Choice::KeepCurrent),
            "1" => Some(Choice::AcceptVariant),
            "2" => Some(Choice::TryAgain),
            "q" | "Q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// What a selector is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// 1-based round number.
    pub number: usize,
    /// Spread the variant was drawn with.
    pub spread: f64,
    /// WAV of the current parameters.
    pub current: PathBuf,
    /// WAV of the variant.
    pub variant: PathBuf,
}

/// Picks between the two attempts of a round.
pub trait Selector {
    fn choose(&mut self, round: &Round) -> Result<Choice>;
}

/// Reads choices from a line-oriented reader, standard input by default.
///
/// Unrecognized lines are re-prompted; end of input quits.
pub struct StdinSelector<R = std::io::StdinLock<'static>> {
    reader: R,
}

impl StdinSelector {
    /// Selector over the process's standard input.
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin().lock(),
        }
    }
}

impl Default for StdinSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinSelector<R> {
    /// Selector over any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Selector for StdinSelector<R> {
    fn choose(&mut self, round: &Round) -> Result<Choice> {
        loop {
            eprintln!(
                "round {}: [0] keep {}  [1] take {}  [2] try again  [q] quit",
                round.number,
                file_name(&round.current),
                file_name(&round.variant)
            );
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(Choice::Quit);
            }
            match Choice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => eprintln!("unrecognized choice: {}", line.trim()),
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Result of a training session.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainOutcome {
    /// Chosen parameters, `None` if the session was quit.
    pub params: Option<EffectParams>,
    /// Path of `<effect>_final.wav`, if one was written.
    pub final_path: Option<PathBuf>,
    /// Rounds played.
    pub rounds: usize,
}

/// Narrows a spread after a declined round.
pub fn narrow_spread(spread: f64) -> f64 {
    (spread * SPREAD_DECAY).max(MIN_SPREAD)
}

/// Drives the A/B search loop.
pub struct Trainer<S, P> {
    attempts_dir: PathBuf,
    sample_rate: u32,
    seed: u32,
    selector: S,
    player: P,
    attempt: usize,
}

impl<S: Selector, P: Player> Trainer<S, P> {
    /// Creates a trainer writing attempts into `attempts_dir`.
    pub fn new(attempts_dir: impl Into<PathBuf>, sample_rate: u32, seed: u32, selector: S, player: P) -> Self {
        Self {
            attempts_dir: attempts_dir.into(),
            sample_rate,
            seed,
            selector,
            player,
            attempt: 0,
        }
    }

    /// The selector, for inspection after a run.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Runs rounds until the selector keeps, accepts or quits.
    pub fn run(&mut self, start: EffectParams) -> Result<TrainOutcome> {
        start.validate(self.sample_rate)?;
        fs::create_dir_all(&self.attempts_dir).with_context(|| {
            format!("Failed to create attempts directory: {}", self.attempts_dir.display())
        })?;

        let current = start;
        let mut spread = INITIAL_SPREAD;
        let mut number = 0;
        loop {
            number += 1;
            let variant = self.propose(&current, spread, number)?;
            let current_path = self.render_attempt(&current)?;
            let variant_path = self.render_attempt(&variant)?;

            let round = Round {
                number,
                spread,
                current: current_path,
                variant: variant_path,
            };
            match self.selector.choose(&round)? {
                Choice::KeepCurrent => return self.finish(current, &round.current, number),
                Choice::AcceptVariant => return self.finish(variant, &round.variant, number),
                Choice::TryAgain => {
                    spread = narrow_spread(spread);
                    log::debug!("round {} declined, spread now {:.3}", number, spread);
                }
                Choice::Quit => {
                    return Ok(TrainOutcome {
                        params: None,
                        final_path: None,
                        rounds: number,
                    })
                }
            }
        }
    }

    /// Draws a valid variant of `current`, or returns `current` when every
    /// draw fails validation.
    fn propose(&self, current: &EffectParams, spread: f64, round: usize) -> Result<EffectParams> {
        let key = format!("variant-{}", round);
        let mut rng = create_component_rng(self.seed, &key);
        let fields = numeric_fields(current)?;

        for draw in 0..MAX_VARIANT_DRAWS {
            let perturbed: Vec<(String, f64)> = fields
                .iter()
                .map(|(name, value)| {
                    let factor = rng.gen_range((1.0 - spread)..=(1.0 + spread));
                    (name.clone(), value * factor)
                })
                .collect();
            let candidate = with_numeric_fields(current, &perturbed)?;
            match candidate.validate(self.sample_rate) {
                Ok(()) => return Ok(candidate),
                Err(e) => log::debug!("draw {} of round {} rejected: {}", draw + 1, round, e),
            }
        }
        log::warn!(
            "no valid variant after {} draws (seed {}), keeping current parameters",
            MAX_VARIANT_DRAWS,
            derive_component_seed(self.seed, &key)
        );
        Ok(current.clone())
    }

    /// Renders, writes and plays one attempt.
    fn render_attempt(&mut self, params: &EffectParams) -> Result<PathBuf> {
        self.attempt += 1;
        let path = self.attempts_dir.join(format!("attempt_{:02}.wav", self.attempt));

        let output = render(params, self.sample_rate, self.seed)?;
        let wav = WavResult::from_output(&output, self.sample_rate);
        write_wav_file(&path, &wav.wav_data)?;
        self.player.play(&decode_wav(&wav.wav_data)?)?;
        Ok(path)
    }

    fn finish(&self, params: EffectParams, winner: &Path, rounds: usize) -> Result<TrainOutcome> {
        let final_path = self
            .attempts_dir
            .join(format!("{}_final.wav", params.kind()));
        fs::rename(winner, &final_path)
            .with_context(|| format!("Failed to save {}", final_path.display()))?;
        Ok(TrainOutcome {
            params: Some(params),
            final_path: Some(final_path),
            rounds,
        })
    }
}
