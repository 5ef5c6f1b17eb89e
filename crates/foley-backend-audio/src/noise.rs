//! Gaussian noise and moving-average band shaping.
//!
//! The filters here are boxcar convolutions with "same"-mode edges: the
//! output has the input's length and windows hanging off either end see
//! zeros. They are deliberately rough; timbres are tuned against them.

use rand_pcg::Pcg32;

use crate::rng::gaussian;

/// `n` i.i.d. samples from N(0, 1).
pub fn white_noise(n: usize, rng: &mut Pcg32) -> Vec<f64> {
    (0..n).map(|_| gaussian(rng)).collect()
}

/// Window length for a moving-average low-pass at `cutoff_hz`.
///
/// `round(sample_rate / cutoff_hz)`, at least 1.
pub fn window_for_cutoff(cutoff_hz: f64, sample_rate: f64) -> usize {
    ((sample_rate / cutoff_hz).round() as usize).max(1)
}

/// Boxcar average over `window` samples, "same"-mode alignment.
///
/// Output `i` averages the inputs `k - window + 1 ..= k` with
/// `k = i + (window - 1) / 2`, treating out-of-range inputs as zero and always
/// dividing by `window`.
///
/// # Example
/// ```
/// use foley_backend_audio::noise::moving_average;
///
/// let out = moving_average(&[3.0, 3.0, 3.0], 3);
/// assert_eq!(out, vec![2.0, 3.0, 2.0]);
/// ```
pub fn moving_average(signal: &[f64], window: usize) -> Vec<f64> {
    let n = signal.len();
    let window = window.max(1);
    if window == 1 {
        return signal.to_vec();
    }

    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for s in signal {
        acc += s;
        prefix.push(acc);
    }

    let offset = (window - 1) / 2;
    let divisor = window as f64;
    (0..n)
        .map(|i| {
            let k = i + offset;
            let hi = (k + 1).min(n);
            let lo = (k + 1).saturating_sub(window).min(hi);
            (prefix[hi] - prefix[lo]) / divisor
        })
        .collect()
}

/// Moving-average low-pass at roughly `cutoff_hz`.
pub fn low_pass(signal: &[f64], cutoff_hz: f64, sample_rate: f64) -> Vec<f64> {
    moving_average(signal, window_for_cutoff(cutoff_hz, sample_rate))
}

/// The signal minus its low-pass.
pub fn high_pass(signal: &[f64], cutoff_hz: f64, sample_rate: f64) -> Vec<f64> {
    let lp = low_pass(signal, cutoff_hz, sample_rate);
    signal.iter().zip(&lp).map(|(s, l)| s - l).collect()
}

/// Approximate band-pass: low-pass at `high_hz`, then subtract the low-pass
/// at `low_hz` of that result.
pub fn band_pass(signal: &[f64], low_hz: f64, high_hz: f64, sample_rate: f64) -> Vec<f64> {
    let upper = low_pass(signal, high_hz, sample_rate);
    subtract_window(&upper, window_for_cutoff(low_hz, sample_rate))
}

/// `signal - moving_average(signal, window)`.
pub fn subtract_window(signal: &[f64], window: usize) -> Vec<f64> {
    let lower = moving_average(signal, window);
    signal.iter().zip(&lower).map(|(s, l)| s - l).collect()
}
