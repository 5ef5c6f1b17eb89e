//! Property tests for the algebraic guarantees of the building blocks.

use std::f64::consts::PI;

use proptest::prelude::*;

use foley_backend_audio::filter::{apply_biquad, BiquadCoeffs};
use foley_backend_audio::oscillator::{doppler_shift, phase_track, tone};
use foley_backend_audio::spatial::pan_gains;
use foley_backend_audio::TimeBase;

proptest! {
    #[test]
    fn prop_constant_power_panning(pan in 0.0f64..=1.0, distance in 0.01f64..=1.0) {
        let (left, right) = pan_gains(pan, distance).unwrap();
        prop_assert!((left * left + right * right - distance * distance).abs() < 1e-6);
        prop_assert!(left >= -1e-12 && right >= -1e-12);
    }

    #[test]
    fn prop_doppler_direction(freq in 20.0f64..10_000.0, velocity in 0.1f64..200.0) {
        prop_assert!(doppler_shift(freq, velocity) > freq);
        prop_assert!(doppler_shift(freq, -velocity) < freq);
        prop_assert_eq!(doppler_shift(freq, 0.0), freq);
    }

    #[test]
    fn prop_time_base_length(duration in 0.001f64..10.0, rate in prop::sample::select(vec![8000u32, 22050, 44100, 48000, 96000])) {
        let tb = TimeBase::new(duration, rate).unwrap();
        prop_assert_eq!(tb.len(), (duration * rate as f64).round() as usize);
    }

    #[test]
    fn prop_phase_continuity(start in 100.0f64..2000.0, end in 100.0f64..2000.0) {
        // A linear glide never steps further per sample than a sine at the
        // highest frequency on the glide.
        let sr = 44100.0;
        let n = 4410;
        let track: Vec<f64> = (0..n).map(|i| start + (end - start) * i as f64 / n as f64).collect();
        let signal = tone(&phase_track(&track, sr), 1.0);
        let max_step = 2.0 * PI * start.max(end) / sr;
        for w in signal.windows(2) {
            prop_assert!((w[1] - w[0]).abs() <= max_step + 1e-9);
        }
    }

    #[test]
    fn prop_biquad_impulse_bounded(center in 20.0f64..20_000.0, q in 10.0f64..60.0) {
        let sr = 44100.0;
        let mut impulse = vec![0.0; 44100];
        impulse[0] = 1.0;
        let out = apply_biquad(&impulse, BiquadCoeffs::bandpass(center, q, sr));
        prop_assert!(out.iter().all(|y| y.is_finite() && y.abs() <= 1.0));
    }
}
