//! Phase-accumulating oscillators and Doppler shift.
//!
//! Time-varying pitch is rendered by integrating the frequency track into a
//! running phase; evaluating `sin(2π·f[i]·t[i])` directly would jump whenever
//! `f` changes.

use std::f64::consts::PI;

use foley_spec::SPEED_OF_SOUND;

use crate::signal::TimeBase;

/// Lowest frequency a track may hold after clamping, in Hz.
pub const MIN_TRACK_FREQ: f64 = 1.0;

/// Clamps a frequency into `[1, sample_rate/2 - 1]`.
#[inline]
pub fn clamp_frequency(freq: f64, sample_rate: f64) -> f64 {
    freq.clamp(MIN_TRACK_FREQ, sample_rate / 2.0 - 1.0)
}

/// `phase[i] = 2π · Σ_{j≤i} f[j] / sample_rate` over the clamped track.
pub fn phase_track(frequency_track: &[f64], sample_rate: f64) -> Vec<f64> {
    let mut acc = 0.0;
    frequency_track
        .iter()
        .map(|f| {
            acc += clamp_frequency(*f, sample_rate);
            2.0 * PI * acc / sample_rate
        })
        .collect()
}

/// `sin(harmonic · phase)`.
pub fn tone(phase: &[f64], harmonic: f64) -> Vec<f64> {
    phase.iter().map(|p| (harmonic * p).sin()).collect()
}

/// Weighted sum of harmonics `Σ w·sin(h·phase)` for `(h, w)` pairs.
pub fn harmonic_stack(phase: &[f64], partials: &[(f64, f64)]) -> Vec<f64> {
    phase
        .iter()
        .map(|p| partials.iter().map(|(h, w)| w * (h * p).sin()).sum())
        .collect()
}

/// Doppler-shifted frequency for a source with radial velocity `velocity`.
///
/// Positive velocity approaches the listener and raises the pitch.
///
/// # Example
/// ```
/// use foley_backend_audio::oscillator::doppler_shift;
///
/// assert_eq!(doppler_shift(440.0, 0.0), 440.0);
/// assert!(doppler_shift(440.0, 30.0) > 440.0);
/// assert!(doppler_shift(440.0, -30.0) < 440.0);
/// ```
pub fn doppler_shift(freq: f64, velocity: f64) -> f64 {
    // (c + v) / c, written so v = 0 returns `freq` bit-for-bit.
    freq * (1.0 + velocity / SPEED_OF_SOUND)
}

/// Radial velocity over a straight pass-by: `v · cos(π·t/duration)`.
///
/// Fully approaching at the start, zero at the midpoint, fully receding at
/// the end.
pub fn pass_by_velocity(tb: &TimeBase, velocity: f64) -> Vec<f64> {
    let duration = tb.duration();
    tb.times()
        .iter()
        .map(|t| velocity * (PI * t / duration).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_track_constant_frequency() {
        let sr = 1000.0;
        let phase = phase_track(&[100.0; 10], sr);
        for (i, p) in phase.iter().enumerate() {
            let expected = 2.0 * PI * 100.0 * (i + 1) as f64 / sr;
            assert!((p - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_phase_track_clamps() {
        let sr = 1000.0;
        let phase = phase_track(&[-50.0, 10_000.0], sr);
        assert!((phase[0] - 2.0 * PI * 1.0 / sr).abs() < 1e-12);
        assert!((phase[1] - 2.0 * PI * (1.0 + 499.0) / sr).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_stack_matches_tones() {
        let phase = phase_track(&[220.0; 64], 44100.0);
        let stack = harmonic_stack(&phase, &[(1.0, 0.5), (2.0, 0.25)]);
        let a = tone(&phase, 1.0);
        let b = tone(&phase, 2.0);
        for i in 0..64 {
            assert!((stack[i] - (0.5 * a[i] + 0.25 * b[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pass_by_velocity_crosses_zero_at_midpoint() {
        let tb = TimeBase::new(1.0, 1000).unwrap();
        let v = pass_by_velocity(&tb, 30.0);
        assert_eq!(v[0], 30.0);
        assert!(v[500].abs() < 1e-9);
        assert!(v[999] < -29.9);
    }

    #[test]
    fn test_doppler_zero_velocity_exact() {
        for f in [20.0, 440.0, 1234.5, 18000.0] {
            assert_eq!(doppler_shift(f, 0.0), f);
        }
    }
}
