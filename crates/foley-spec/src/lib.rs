//! Foley Effect Parameter Library
//!
//! This crate provides the typed, validated parameter structures for every
//! procedural sound effect Foley can synthesize, plus the JSON document that
//! wraps them.
//!
//! # Overview
//!
//! A request is an [`SfxSpec`]:
//!
//! - **seed**: drives every random draw, so equal specs render identical audio
//! - **sample_rate**: output rate in Hz (default 44100)
//! - **effect**: an [`EffectParams`] tagged by `type`, one struct per effect
//!
//! # Example
//!
//! ```
//! use foley_spec::{EffectKind, EffectParams, SfxSpec};
//! use foley_spec::overrides::apply_override;
//!
//! let mut spec = SfxSpec::with_defaults(EffectKind::HingeCreak, 42);
//! spec.effect = apply_override(&spec.effect, "mode_q", "40").unwrap();
//! spec.validate().unwrap();
//!
//! let json = spec.to_json_pretty().unwrap();
//! assert!(json.contains("\"type\": \"hinge_creak\""));
//! ```
//!
//! # Modules
//!
//! - [`error`]: `ParamError` and the shared `CodedError` trait
//! - [`effect`]: effect kinds and the tagged parameter union
//! - [`params`]: per-effect parameter structs with defaults and validation
//! - [`spec`]: the top-level document
//! - [`overrides`]: key-based field edits used by the CLI and trainer
//! - [`validation`]: range-check helpers

pub mod effect;
pub mod error;
pub mod overrides;
pub mod params;
pub mod spec;
pub mod validation;

pub use effect::{EffectKind, EffectParams};
pub use error::{CodedError, ParamError};
pub use params::{
    ButtonClickParams, DoorCreakParams, ExplosionParams, FlyingSaucerParams,
    GravelFootstepsParams, HingeCreakParams, SirenParams, SirenType, ThudParams, WindParams,
    MAX_DOPPLER_VELOCITY, SPEED_OF_SOUND,
};
pub use spec::{SfxSpec, DEFAULT_SAMPLE_RATE};
