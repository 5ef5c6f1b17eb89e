//! Tests for peak normalization and saturation.

use super::*;
use crate::signal::peak;

#[test]
fn test_normalize_to_volume() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    let before = normalize(&mut samples, 0.7);
    assert_eq!(before, 0.8);
    assert!((peak(&samples) - 0.7).abs() < 1e-12);
    // Shape is preserved.
    assert!((samples[0] / samples[2] - 0.5 / 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0; 4];
    assert_eq!(normalize(&mut samples, 0.7), 0.0);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.1, -2.0, 0.5];
    normalize(&mut samples, 1.0);
    assert_eq!(samples[1], -1.0);
}

#[test]
fn test_tanh_limit_unity_at_full_scale() {
    for drive in [0.5, 1.5, 4.0] {
        assert!((tanh_limit(1.0, drive) - 1.0).abs() < 1e-12);
        assert!((tanh_limit(-1.0, drive) + 1.0).abs() < 1e-12);
        assert_eq!(tanh_limit(0.0, drive), 0.0);
    }
}

#[test]
fn test_tanh_limit_lifts_quiet_samples() {
    // Saturation compresses: mid-level samples come out louder relative to
    // the peak.
    let y = tanh_limit(0.5, 1.5);
    assert!(y > 0.5 && y < 1.0);
}

#[test]
fn test_tanh_limit_buffer_keeps_peak() {
    let mut samples = vec![0.2, -1.0, 0.6];
    tanh_limit_buffer(&mut samples, 1.5);
    assert!((peak(&samples) - 1.0).abs() < 1e-12);
}
