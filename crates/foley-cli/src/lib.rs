//! Foley CLI library.
//!
//! Spec loading, the interactive trainer, audio playback and the command
//! implementations behind the `foley` binary.

pub mod commands;
pub mod input;
pub mod playback;
pub mod trainer;
