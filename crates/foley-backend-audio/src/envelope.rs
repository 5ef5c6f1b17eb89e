//! Amplitude envelopes.
//!
//! Envelopes are plain sample buffers of non-negative gains with the same
//! length as the signal they scale. Composite envelopes start from a buffer of
//! ones, write the attack into the prefix and the decay into the suffix.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::signal::{linspace, TimeBase};

/// Shape of the rising segment of a composite envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackShape {
    /// Straight ramp from 0 to 1.
    Linear,
    /// Raised-cosine rise, `(1 - cos(π·t/attack)) / 2`.
    Cosine,
}

/// Linear ramp 0 → 1 over `n` samples (both ends included).
pub fn linear_attack(n: usize) -> Vec<f64> {
    linspace(0.0, 1.0, n)
}

/// Raised-cosine rise evaluated at `times`, reaching 1 at `duration`.
pub fn cosine_attack(duration: f64, times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .map(|t| (1.0 - (PI * t / duration).cos()) / 2.0)
        .collect()
}

/// `exp(-rate·t/decay_time)` evaluated at `times`.
///
/// `times` are absolute timestamps, so the curve starts slightly below 1 when
/// the decay begins after an attack.
pub fn exponential_decay(times: &[f64], decay_time: f64, rate: f64) -> Vec<f64> {
    times
        .iter()
        .map(|t| (-rate * t / decay_time).exp())
        .collect()
}

/// Parameters for a composite attack / hold / exponential-decay envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackDecay {
    /// Attack length in seconds.
    pub attack: f64,
    /// Attack curve.
    pub shape: AttackShape,
    /// Seconds held at 1 after the attack.
    pub hold: f64,
    /// Decay steepness.
    pub rate: f64,
}

impl AttackDecay {
    /// Linear attack, no hold.
    pub fn linear(attack: f64, rate: f64) -> Self {
        Self {
            attack,
            shape: AttackShape::Linear,
            hold: 0.0,
            rate,
        }
    }

    /// Cosine attack, no hold.
    pub fn cosine(attack: f64, rate: f64) -> Self {
        Self {
            attack,
            shape: AttackShape::Cosine,
            hold: 0.0,
            rate,
        }
    }

    /// Adds a hold segment at full level.
    pub fn with_hold(mut self, hold: f64) -> Self {
        self.hold = hold;
        self
    }

    /// Renders the envelope over `tb`.
    ///
    /// Segment boundaries are truncated to whole samples and clamped to the
    /// buffer, so a clip shorter than its attack is all attack. The decay time
    /// is what remains of the clip after attack and hold, floored at one
    /// sample period.
    pub fn render(&self, tb: &TimeBase) -> Vec<f64> {
        let n = tb.len();
        let times = tb.times();
        let mut env = vec![1.0; n];

        let attack_n = tb.seconds_to_samples(self.attack).min(n);
        if attack_n > 0 {
            let attack = match self.shape {
                AttackShape::Linear => linear_attack(attack_n),
                AttackShape::Cosine => cosine_attack(self.attack, &times[..attack_n]),
            };
            env[..attack_n].copy_from_slice(&attack);
        }

        let decay_start = tb.seconds_to_samples(self.attack + self.hold).clamp(attack_n, n);
        let decay_time = (tb.duration() - self.attack - self.hold).max(1.0 / tb.sample_rate_f64());
        let decay = exponential_decay(&times[decay_start..], decay_time, self.rate);
        env[decay_start..].copy_from_slice(&decay);
        env
    }
}

/// Linear fade-in and fade-out applied over a whole buffer.
///
/// Each fade is skipped when it would not fit inside the buffer.
pub fn fade_in_out(n: usize, fade_in: usize, fade_out: usize) -> Vec<f64> {
    let mut env = vec![1.0; n];
    if fade_in > 0 && fade_in < n {
        env[..fade_in].copy_from_slice(&linspace(0.0, 1.0, fade_in));
    }
    if fade_out > 0 && fade_out < n {
        let start = n - fade_out;
        for (e, g) in env[start..].iter_mut().zip(linspace(1.0, 0.0, fade_out)) {
            *e *= g;
        }
    }
    env
}

/// Irregular friction bursts for stick-slip excitation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickSlip {
    /// Mean bursts per second.
    pub rate_hz: f64,
    /// Nominal burst length in milliseconds.
    pub burst_ms: f64,
}

impl StickSlip {
    /// Creates a stick-slip envelope description.
    pub fn new(rate_hz: f64, burst_ms: f64) -> Self {
        Self { rate_hz, burst_ms }
    }

    /// Renders `n` samples of bursts at `sample_rate`.
    ///
    /// Each burst is placed at the running cursor, then the cursor advances by
    /// the nominal interval jittered into `[0.7, 1.3]`. A burst lasts the
    /// nominal length jittered into `[0.6, 1.4]`, floored at 10 ms, rising
    /// over its first 20% and falling over the rest, scaled by a random
    /// amplitude in `[0.4, 1.0]`. Bursts overwrite earlier content and are cut
    /// at the buffer end.
    pub fn render(&self, n: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let mut env = vec![0.0; n];
        let interval = sample_rate / self.rate_hz;
        let nominal = ((self.burst_ms / 1000.0) * sample_rate) as usize as f64;
        let min_len = (sample_rate * 0.01) as usize;

        let mut cursor = 0usize;
        while cursor < n {
            let step = (interval * (1.0 + (rng.gen::<f64>() - 0.5) * 0.6)) as usize;
            let len = ((nominal * (1.0 + (rng.gen::<f64>() - 0.5) * 0.8)) as usize).max(min_len);
            let amplitude = 0.4 + rng.gen::<f64>() * 0.6;

            let burst = burst_shape(len);
            let end = (cursor + len).min(n);
            for (e, b) in env[cursor..end].iter_mut().zip(&burst) {
                *e = b * amplitude;
            }
            cursor += step.max(1);
        }
        env
    }
}

/// Asymmetric burst: `1 - exp(-5x)` over the first 20%, `exp(-3x)` after.
fn burst_shape(len: usize) -> Vec<f64> {
    let attack_n = (len as f64 * 0.2) as usize;
    let decay_n = len - attack_n;
    let mut shape = Vec::with_capacity(len);
    shape.extend(linspace(0.0, 1.0, attack_n).into_iter().map(|x| 1.0 - (-5.0 * x).exp()));
    shape.extend(linspace(0.0, 1.0, decay_n).into_iter().map(|x| (-3.0 * x).exp()));
    shape
}
