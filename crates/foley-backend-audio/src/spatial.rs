//! Constant-power stereo placement.
//!
//! Pan runs from 0 (hard left) to 1 (hard right); distance is a linear gain in
//! `(0, 1]`. For any pan, `left² + right² == distance²`.

use std::f64::consts::FRAC_PI_2;

use crate::error::{AudioError, AudioResult};
use crate::mixer::StereoPair;
use crate::signal::TimeBase;

/// Left and right gains for one pan position and distance.
pub fn pan_gains(pan: f64, distance: f64) -> AudioResult<(f64, f64)> {
    if !(0.0..=1.0).contains(&pan) {
        return Err(AudioError::invalid_param(
            "pan",
            format!("must be in [0, 1], got {}", pan),
        ));
    }
    if !(distance > 0.0 && distance <= 1.0) {
        return Err(AudioError::invalid_param(
            "distance",
            format!("must be in (0, 1], got {}", distance),
        ));
    }
    let angle = pan * FRAC_PI_2;
    Ok((angle.cos() * distance, angle.sin() * distance))
}

/// Places a mono signal at a fixed position.
pub fn pan(signal: &[f64], pan: f64, distance: f64) -> AudioResult<StereoPair> {
    let (left_gain, right_gain) = pan_gains(pan, distance)?;
    Ok(StereoPair {
        left: signal.iter().map(|s| s * left_gain).collect(),
        right: signal.iter().map(|s| s * right_gain).collect(),
    })
}

/// Adds a panned copy of `signal` into `pair` starting at `offset`.
///
/// Samples past the end of `pair` are dropped.
pub fn pan_into(
    pair: &mut StereoPair,
    signal: &[f64],
    offset: usize,
    pan: f64,
    distance: f64,
) -> AudioResult<()> {
    let (left_gain, right_gain) = pan_gains(pan, distance)?;
    let end = (offset + signal.len()).min(pair.len());
    if offset >= end {
        return Ok(());
    }
    for (i, s) in signal[..end - offset].iter().enumerate() {
        pair.left[offset + i] += s * left_gain;
        pair.right[offset + i] += s * right_gain;
    }
    Ok(())
}

/// Sweeps a mono signal from left to right across the clip.
///
/// At time `t` the pan is `t/duration` and the distance gain is
/// `1 - attenuation·t/duration`, so the source fades as it moves right.
pub fn pass_by(signal: &[f64], tb: &TimeBase, attenuation: f64) -> AudioResult<StereoPair> {
    tb.check_len(signal)?;
    if !(0.0..1.0).contains(&attenuation) {
        return Err(AudioError::invalid_param(
            "attenuation",
            format!("must be in [0, 1), got {}", attenuation),
        ));
    }
    let duration = tb.duration();
    let mut pair = StereoPair::silent(signal.len());
    for (i, (s, t)) in signal.iter().zip(tb.times()).enumerate() {
        let position = t / duration;
        let (left_gain, right_gain) = pan_gains(position, 1.0 - attenuation * position)?;
        pair.left[i] = s * left_gain;
        pair.right[i] = s * right_gain;
    }
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_extremes() {
        let (l, r) = pan_gains(0.0, 1.0).unwrap();
        assert_eq!((l, r), (1.0, 0.0));
        let (l, r) = pan_gains(1.0, 0.5).unwrap();
        assert!(l.abs() < 1e-12);
        assert!((r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_center_pan_equal_power() {
        let (l, r) = pan_gains(0.5, 1.0).unwrap();
        let expected = std::f64::consts::FRAC_PI_4.cos();
        assert!((l - expected).abs() < 1e-12);
        assert!((r - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pan_rejects_out_of_range() {
        assert!(pan_gains(-0.1, 1.0).is_err());
        assert!(pan_gains(1.1, 1.0).is_err());
        assert!(pan_gains(0.5, 0.0).is_err());
        assert!(pan_gains(0.5, 1.5).is_err());
        assert!(pan_gains(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_pan_into_clips_at_end() {
        let mut pair = StereoPair::silent(4);
        pan_into(&mut pair, &[1.0, 1.0, 1.0], 2, 0.0, 1.0).unwrap();
        assert_eq!(pair.left, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(pair.right, vec![0.0; 4]);
        pan_into(&mut pair, &[1.0], 10, 0.0, 1.0).unwrap();
        assert_eq!(pair.left.len(), 4);
    }

    #[test]
    fn test_pass_by_moves_left_to_right() {
        let tb = TimeBase::new(1.0, 1000).unwrap();
        let pair = pass_by(&vec![1.0; 1000], &tb, 0.8).unwrap();
        assert_eq!(pair.left[0], 1.0);
        assert_eq!(pair.right[0], 0.0);
        assert!(pair.right[999] > pair.left[999]);
        // Distance shrinks the far end.
        let power_end = pair.left[999].powi(2) + pair.right[999].powi(2);
        let expected = (1.0 - 0.8 * 0.999f64).powi(2);
        assert!((power_end - expected).abs() < 1e-9);
    }
}
