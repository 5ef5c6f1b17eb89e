//! Effect synthesizers.
//!
//! Each effect's parameter struct implements [`Effect`]; the raw buffer it
//! returns still has to go through the finishing stage in
//! [`crate::mixer::finish`] before it is written out.
//!
//! - `thud` - Low sine plus heavily smoothed noise
//! - `explosion` - Layered rumble and noise bands with tanh saturation
//! - `creak` - Wobbling friction voice shared by door creak and wind
//! - `hinge` - Stick-slip bursts driving a modal resonator bank
//! - `siren` - Wail, hi-lo and yelp patterns with pass-by Doppler
//! - `saucer` - Three-rate sweeping carrier with pass-by Doppler
//! - `footsteps` - Discrete gravel steps walking left to right
//! - `click` - Short bright button click

pub mod click;
pub mod creak;
pub mod explosion;
pub mod footsteps;
pub mod hinge;
pub mod saucer;
pub mod siren;
pub mod thud;

use foley_spec::EffectParams;
use rand_pcg::Pcg32;

use crate::error::AudioResult;
use crate::mixer::SfxOutput;
use crate::oscillator::pass_by_velocity;
use crate::signal::TimeBase;

/// Share of the distance gain a pass-by source loses by the end of the clip.
pub(crate) const PASS_BY_ATTENUATION: f64 = 0.8;

/// Radial velocity per sample for a pass-by source, or all zeros when the
/// Doppler shift is off.
pub(crate) fn radial_velocity(apply_doppler: bool, velocity: f64, tb: &TimeBase) -> Vec<f64> {
    if apply_doppler {
        pass_by_velocity(tb, velocity)
    } else {
        tb.zeros()
    }
}

/// Common trait for all effect synthesizers.
pub trait Effect {
    /// Renders the unfinished effect over `tb`.
    ///
    /// # Arguments
    /// * `tb` - Shared time base; every returned channel has its length
    /// * `rng` - Deterministic RNG for any randomness
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput>;
}

impl Effect for EffectParams {
    fn synthesize(&self, tb: &TimeBase, rng: &mut Pcg32) -> AudioResult<SfxOutput> {
        match self {
            EffectParams::Thud(p) => p.synthesize(tb, rng),
            EffectParams::Explosion(p) => p.synthesize(tb, rng),
            EffectParams::DoorCreak(p) => p.synthesize(tb, rng),
            EffectParams::HingeCreak(p) => p.synthesize(tb, rng),
            EffectParams::Siren(p) => p.synthesize(tb, rng),
            EffectParams::Wind(p) => p.synthesize(tb, rng),
            EffectParams::GravelFootsteps(p) => p.synthesize(tb, rng),
            EffectParams::ButtonClick(p) => p.synthesize(tb, rng),
            EffectParams::FlyingSaucer(p) => p.synthesize(tb, rng),
        }
    }
}
