//! Tests for output types.

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_stereo_pair_interleave() {
    let pair = StereoPair {
        left: vec![1.0, 2.0],
        right: vec![-1.0, -2.0],
    };
    assert_eq!(pair.interleave(), vec![1.0, -1.0, 2.0, -2.0]);
    assert_eq!(pair.len(), 2);
}

#[test]
fn test_silent_pair() {
    let pair = StereoPair::silent(3);
    assert_eq!(pair.left, vec![0.0; 3]);
    assert_eq!(pair.right, vec![0.0; 3]);
    assert!(StereoPair::silent(0).is_empty());
}

#[test]
fn test_sfx_output_channels_and_peak() {
    let mono = SfxOutput::Mono(vec![0.1, -0.4]);
    assert_eq!(mono.channels(), 1);
    assert_eq!(mono.len(), 2);
    assert_eq!(mono.peak(), 0.4);

    let stereo = SfxOutput::Stereo(StereoPair {
        left: vec![0.1, 0.2],
        right: vec![0.9, 0.0],
    });
    assert_eq!(stereo.channels(), 2);
    assert_eq!(stereo.peak(), 0.9);
}
