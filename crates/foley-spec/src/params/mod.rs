//! Per-effect parameter structures.
//!
//! Every struct deserializes with `#[serde(default)]`, so a document only
//! needs the fields it changes, and rejects unknown keys so typos surface as
//! errors instead of silently using a default.

pub mod creak;
pub mod explosion;
pub mod footsteps;
pub mod hinge;
pub mod impact;
pub mod saucer;
pub mod siren;

pub use creak::{DoorCreakParams, WindParams};
pub use explosion::ExplosionParams;
pub use footsteps::GravelFootstepsParams;
pub use hinge::HingeCreakParams;
pub use impact::{ButtonClickParams, ThudParams};
pub use saucer::FlyingSaucerParams;
pub use siren::{SirenParams, SirenType};

use crate::error::ParamError;
use crate::validation::check_range;

/// Speed of sound in air, m/s.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Highest harmonic the tonal effects stack on their carrier.
pub const HIGHEST_PARTIAL: f64 = 3.0;

/// Fastest pass-by accepted, m/s.
pub const MAX_DOPPLER_VELOCITY: f64 = 200.0;

pub(crate) fn check_doppler(velocity: f64) -> Result<(), ParamError> {
    check_range(
        "doppler_velocity",
        velocity,
        -MAX_DOPPLER_VELOCITY,
        MAX_DOPPLER_VELOCITY,
    )
}

/// Largest upward frequency ratio a pass-by at `velocity` produces.
pub(crate) fn doppler_headroom(velocity: f64) -> f64 {
    (SPEED_OF_SOUND + velocity.abs()) / SPEED_OF_SOUND
}
