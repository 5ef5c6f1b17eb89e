//! Foley Audio Backend
//!
//! Procedural sound-effect synthesis: every effect is built from
//! mathematical generators, with no sampled source audio.
//!
//! # Overview
//!
//! An effect is a composition of a few shared building blocks:
//!
//! - **Envelopes** - attack/hold/decay curves and stick-slip friction bursts
//! - **Noise bands** - Gaussian noise shaped by moving-average filters
//! - **Oscillators** - phase-integrated tones with Doppler-shifted pitch
//! - **Modal resonators** - biquad band-pass banks for struck or rubbed objects
//! - **Spatializer** - constant-power panning and pass-by sweeps
//!
//! Every effect ends in the same finishing stage: normalize to the requested
//! volume, optionally smooth with a low-pass, normalize again.
//!
//! # Determinism
//!
//! All randomness flows through a caller-supplied PCG32 handle. Given the same
//! spec and seed the output is byte-identical across runs.
//!
//! # Example
//!
//! ```
//! use foley_backend_audio::generate;
//! use foley_spec::{EffectKind, SfxSpec};
//!
//! let spec = SfxSpec::with_defaults(EffectKind::Thud, 42);
//! let result = generate(&spec).unwrap();
//!
//! assert_eq!(result.wav.num_samples, 13230);
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`sfx`] - The [`Effect`] trait and one implementation per effect
//! - [`envelope`], [`noise`], [`oscillator`], [`filter`], [`modal`],
//!   [`spatial`] - Building blocks
//! - [`mixer`] - Output types and the finishing stage
//! - [`signal`] - Time base and buffer helpers
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - WAV encoding, decoding and atomic file output

pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod mixer;
pub mod modal;
pub mod noise;
pub mod oscillator;
pub mod rng;
pub mod sfx;
pub mod signal;
pub mod spatial;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use generate::{generate, render, synthesize_finished, GenerateResult};
pub use mixer::{SfxOutput, StereoPair};
pub use sfx::Effect;
pub use signal::TimeBase;
pub use wav::{decode_wav, write_wav_file, DecodedAudio, WavResult};
