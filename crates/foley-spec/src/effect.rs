//! Effect selection: the kind enum and the tagged parameter union.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::params::{
    ButtonClickParams, DoorCreakParams, ExplosionParams, FlyingSaucerParams,
    GravelFootstepsParams, HingeCreakParams, SirenParams, ThudParams, WindParams,
};

/// The synthesizable effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Low impact thump.
    Thud,
    /// Layered blast with saturation.
    Explosion,
    /// Wobbling door creak.
    DoorCreak,
    /// Stick-slip hinge creak through resonant modes.
    HingeCreak,
    /// Passing emergency siren.
    Siren,
    /// Whistling wind.
    Wind,
    /// Footsteps on gravel.
    GravelFootsteps,
    /// UI button click.
    ButtonClick,
    /// Hovering UFO.
    FlyingSaucer,
}

impl EffectKind {
    /// Returns the effect as its snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Thud => "thud",
            EffectKind::Explosion => "explosion",
            EffectKind::DoorCreak => "door_creak",
            EffectKind::HingeCreak => "hinge_creak",
            EffectKind::Siren => "siren",
            EffectKind::Wind => "wind",
            EffectKind::GravelFootsteps => "gravel_footsteps",
            EffectKind::ButtonClick => "button_click",
            EffectKind::FlyingSaucer => "flying_saucer",
        }
    }

    /// Returns every effect kind.
    pub fn all() -> &'static [EffectKind] {
        &[
            EffectKind::Thud,
            EffectKind::Explosion,
            EffectKind::DoorCreak,
            EffectKind::HingeCreak,
            EffectKind::Siren,
            EffectKind::Wind,
            EffectKind::GravelFootsteps,
            EffectKind::ButtonClick,
            EffectKind::FlyingSaucer,
        ]
    }

    /// Names of every effect kind, in `all()` order.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|k| k.as_str()).collect()
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            EffectKind::Thud => "low sine thump with smoothed noise (mono)",
            EffectKind::Explosion => "sub-bass rumble, noise bands, tanh limiter (mono)",
            EffectKind::DoorCreak => "wobbling friction tone with stick jumps (mono)",
            EffectKind::HingeCreak => "stick-slip bursts through a 3-mode resonator bank (mono)",
            EffectKind::Siren => "wail / hi_lo / yelp pass-by with Doppler (stereo)",
            EffectKind::Wind => "whistling gap wind (mono)",
            EffectKind::GravelFootsteps => "crunching steps walking left to right (stereo)",
            EffectKind::ButtonClick => "short high click (mono)",
            EffectKind::FlyingSaucer => "sweeping UFO hum pass-by (stereo)",
        }
    }

    /// Whether the effect renders a stereo pair.
    pub fn is_stereo(&self) -> bool {
        matches!(
            self,
            EffectKind::Siren | EffectKind::GravelFootsteps | EffectKind::FlyingSaucer
        )
    }

    /// Default parameters for this effect.
    pub fn default_params(&self) -> EffectParams {
        match self {
            EffectKind::Thud => EffectParams::Thud(ThudParams::default()),
            EffectKind::Explosion => EffectParams::Explosion(ExplosionParams::default()),
            EffectKind::DoorCreak => EffectParams::DoorCreak(DoorCreakParams::default()),
            EffectKind::HingeCreak => EffectParams::HingeCreak(HingeCreakParams::default()),
            EffectKind::Siren => EffectParams::Siren(SirenParams::default()),
            EffectKind::Wind => EffectParams::Wind(WindParams::default()),
            EffectKind::GravelFootsteps => {
                EffectParams::GravelFootsteps(GravelFootstepsParams::default())
            }
            EffectKind::ButtonClick => EffectParams::ButtonClick(ButtonClickParams::default()),
            EffectKind::FlyingSaucer => EffectParams::FlyingSaucer(FlyingSaucerParams::default()),
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EffectKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParamError::unsupported_variant("effect", s, &EffectKind::names()))
    }
}

/// Parameters for one effect, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectParams {
    /// Thud parameters.
    Thud(ThudParams),
    /// Explosion parameters.
    Explosion(ExplosionParams),
    /// Door creak parameters.
    DoorCreak(DoorCreakParams),
    /// Hinge creak parameters.
    HingeCreak(HingeCreakParams),
    /// Siren parameters.
    Siren(SirenParams),
    /// Wind parameters.
    Wind(WindParams),
    /// Gravel footsteps parameters.
    GravelFootsteps(GravelFootstepsParams),
    /// Button click parameters.
    ButtonClick(ButtonClickParams),
    /// Flying saucer parameters.
    FlyingSaucer(FlyingSaucerParams),
}

impl EffectParams {
    /// Which effect these parameters drive.
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectParams::Thud(_) => EffectKind::Thud,
            EffectParams::Explosion(_) => EffectKind::Explosion,
            EffectParams::DoorCreak(_) => EffectKind::DoorCreak,
            EffectParams::HingeCreak(_) => EffectKind::HingeCreak,
            EffectParams::Siren(_) => EffectKind::Siren,
            EffectParams::Wind(_) => EffectKind::Wind,
            EffectParams::GravelFootsteps(_) => EffectKind::GravelFootsteps,
            EffectParams::ButtonClick(_) => EffectKind::ButtonClick,
            EffectParams::FlyingSaucer(_) => EffectKind::FlyingSaucer,
        }
    }

    /// Clip length in seconds.
    pub fn duration(&self) -> f64 {
        self.common().0
    }

    /// Output peak amplitude.
    pub fn volume(&self) -> f64 {
        self.common().1
    }

    /// Smoothing low-pass cutoff, if any.
    pub fn cutoff(&self) -> Option<f64> {
        self.common().2
    }

    fn common(&self) -> (f64, f64, Option<f64>) {
        match self {
            EffectParams::Thud(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::Explosion(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::DoorCreak(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::HingeCreak(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::Siren(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::Wind(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::GravelFootsteps(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::ButtonClick(p) => (p.duration, p.volume, p.cutoff),
            EffectParams::FlyingSaucer(p) => (p.duration, p.volume, p.cutoff),
        }
    }

    /// Validates every field against `sample_rate`.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ParamError> {
        match self {
            EffectParams::Thud(p) => p.validate(sample_rate),
            EffectParams::Explosion(p) => p.validate(sample_rate),
            EffectParams::DoorCreak(p) => p.validate(sample_rate),
            EffectParams::HingeCreak(p) => p.validate(sample_rate),
            EffectParams::Siren(p) => p.validate(sample_rate),
            EffectParams::Wind(p) => p.validate(sample_rate),
            EffectParams::GravelFootsteps(p) => p.validate(sample_rate),
            EffectParams::ButtonClick(p) => p.validate(sample_rate),
            EffectParams::FlyingSaucer(p) => p.validate(sample_rate),
        }
    }
}
