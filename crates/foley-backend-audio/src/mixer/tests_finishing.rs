//! Tests for the normalize / smooth / normalize pipeline.

use super::*;
use crate::error::AudioError;
use crate::signal::peak;

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i as f64) * 0.37).sin() * (i as f64 + 1.0)).collect()
}

#[test]
fn test_finish_mono_hits_volume_without_cutoff() {
    let out = finish_mono(ramp(500), 0.7, None, 44100.0).unwrap();
    assert_eq!(out.len(), 500);
    assert!((peak(&out) - 0.7).abs() < 1e-9);
}

#[test]
fn test_finish_mono_renormalizes_after_filter() {
    let out = finish_mono(ramp(2000), 0.5, Some(2000.0), 44100.0).unwrap();
    assert_eq!(out.len(), 2000);
    assert!((peak(&out) - 0.5).abs() < 1e-9);
}

#[test]
fn test_finish_mono_rejects_silence() {
    let err = finish_mono(vec![0.0; 100], 0.7, None, 44100.0).unwrap_err();
    assert!(matches!(err, AudioError::InvalidSignal { .. }));
}

#[test]
fn test_finish_mono_rejects_nan() {
    let mut samples = ramp(10);
    samples[3] = f64::NAN;
    assert!(matches!(
        finish_mono(samples, 0.7, None, 44100.0),
        Err(AudioError::InvalidSignal { .. })
    ));
}

#[test]
fn test_finish_stereo_normalizes_each_channel() {
    let left = ramp(300);
    let right: Vec<f64> = ramp(300).iter().map(|s| s * 0.1).collect();
    let out = finish_stereo(StereoPair { left, right }, 0.6, Some(4000.0), 44100.0).unwrap();
    assert!((peak(&out.left) - 0.6).abs() < 1e-9);
    assert!((peak(&out.right) - 0.6).abs() < 1e-9);
}

#[test]
fn test_finish_dispatches_on_layout() {
    let mono = finish(SfxOutput::Mono(ramp(64)), 0.7, None, 44100.0).unwrap();
    assert!(!mono.is_stereo());
    let stereo = finish(
        SfxOutput::Stereo(StereoPair {
            left: ramp(64),
            right: ramp(64),
        }),
        0.7,
        None,
        44100.0,
    )
    .unwrap();
    assert_eq!(stereo.channels(), 2);
    assert!((stereo.peak() - 0.7).abs() < 1e-9);
}

#[test]
fn test_finish_mono_rejects_cutoff_above_nyquist() {
    let err = finish_mono(ramp(100), 0.7, Some(30_000.0), 44100.0).unwrap_err();
    assert!(matches!(err, AudioError::InvalidFrequency { sample_rate: 44100, .. }));
}
