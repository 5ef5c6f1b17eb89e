//! Audio playback through an OS command-line player.

use anyhow::{bail, Context, Result};
use foley_backend_audio::wav::{samples_to_pcm16, write_wav_to_vec, WavFormat};
use foley_backend_audio::DecodedAudio;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Known players, in order of preference, with the arguments placed before
/// the file path.
pub const PLAYER_COMMANDS: &[(&str, &[&str])] = &[
    ("afplay", &[]),
    ("paplay", &[]),
    ("aplay", &["-q"]),
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
];

/// Plays decoded audio, blocking until playback completes.
pub trait Player {
    /// Plays `audio` to completion.
    fn play(&self, audio: &DecodedAudio) -> Result<()>;
}

/// Plays through the first command-line player found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemPlayer {
    program: PathBuf,
    args: Vec<String>,
}

impl SystemPlayer {
    /// Finds an installed player.
    pub fn detect() -> Result<Self> {
        for (name, args) in PLAYER_COMMANDS {
            if let Ok(program) = which::which(name) {
                log::debug!("using {} for playback", program.display());
                return Ok(Self {
                    program,
                    args: args.iter().map(|a| a.to_string()).collect(),
                });
            }
        }
        let names: Vec<&str> = PLAYER_COMMANDS.iter().map(|(name, _)| *name).collect();
        bail!("no audio player found (tried {})", names.join(", "))
    }

    /// Path of the player executable.
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Player for SystemPlayer {
    fn play(&self, audio: &DecodedAudio) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("foley-")
            .suffix(".wav")
            .tempfile()
            .context("Failed to create temporary WAV file")?;
        file.write_all(&encode(audio))
            .context("Failed to write temporary WAV file")?;
        file.flush()?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;
        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

/// Skips playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl Player for SilentPlayer {
    fn play(&self, audio: &DecodedAudio) -> Result<()> {
        log::debug!("skipping playback of {:.2} s", audio.duration_seconds());
        Ok(())
    }
}

/// Re-encodes decoded audio as 16-bit PCM WAV bytes.
fn encode(audio: &DecodedAudio) -> Vec<u8> {
    let samples: Vec<f64> = audio.samples.iter().map(|s| *s as f64).collect();
    let format = WavFormat::pcm16(audio.channels, audio.sample_rate);
    write_wav_to_vec(&format, &samples_to_pcm16(&samples))
}
