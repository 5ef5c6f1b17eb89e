//! Time base and sample-buffer helpers.
//!
//! Every generator in one synthesis call shares a single [`TimeBase`]; signals
//! combined sample-by-sample must have its length, which [`mix_into`] and
//! [`multiply`] check.

use std::f64::consts::PI;

use crate::error::{AudioError, AudioResult};

/// Sample timestamps for one synthesis call: `t[i] = i / sample_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    sample_rate: u32,
    times: Vec<f64>,
}

impl TimeBase {
    /// Builds the time base for `duration` seconds at `sample_rate`.
    ///
    /// The length is `round(duration * sample_rate)`.
    ///
    /// # Example
    /// ```
    /// use foley_backend_audio::signal::TimeBase;
    ///
    /// let tb = TimeBase::new(0.3, 44100).unwrap();
    /// assert_eq!(tb.len(), 13230);
    /// assert_eq!(tb.times()[1], 1.0 / 44100.0);
    /// ```
    pub fn new(duration: f64, sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AudioError::InvalidDuration { duration });
        }
        let len = (duration * sample_rate as f64).round() as usize;
        if len == 0 {
            return Err(AudioError::InvalidDuration { duration });
        }
        let sr = sample_rate as f64;
        let times = (0..len).map(|i| i as f64 / sr).collect();
        Ok(Self { sample_rate, times })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; a time base holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample timestamps in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sample rate in Hz as a float.
    pub fn sample_rate_f64(&self) -> f64 {
        self.sample_rate as f64
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate_f64() / 2.0
    }

    /// Clip length in seconds, `len / sample_rate`.
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate_f64()
    }

    /// Converts seconds to a whole number of samples, truncating.
    pub fn seconds_to_samples(&self, seconds: f64) -> usize {
        (seconds.max(0.0) * self.sample_rate_f64()) as usize
    }

    /// A zero-filled buffer of this length.
    pub fn zeros(&self) -> Vec<f64> {
        vec![0.0; self.len()]
    }

    /// `sin(2π·freq·t)` over the time base.
    pub fn sine(&self, freq: f64) -> Vec<f64> {
        self.times.iter().map(|t| (2.0 * PI * freq * t).sin()).collect()
    }

    /// Errors unless `signal` matches this time base's length.
    pub fn check_len(&self, signal: &[f64]) -> AudioResult<()> {
        check_same_len(self.len(), signal)
    }
}

fn check_same_len(expected: usize, signal: &[f64]) -> AudioResult<()> {
    if signal.len() != expected {
        return Err(AudioError::LengthMismatch {
            expected,
            actual: signal.len(),
        });
    }
    Ok(())
}

/// Adds `gain * src` into `dst` sample-by-sample.
pub fn mix_into(dst: &mut [f64], src: &[f64], gain: f64) -> AudioResult<()> {
    check_same_len(dst.len(), src)?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d += gain * s;
    }
    Ok(())
}

/// Multiplies `dst` by `factor` sample-by-sample.
pub fn multiply(dst: &mut [f64], factor: &[f64]) -> AudioResult<()> {
    check_same_len(dst.len(), factor)?;
    for (d, f) in dst.iter_mut().zip(factor) {
        *d *= f;
    }
    Ok(())
}

/// Scales every sample by `gain`.
pub fn scale(samples: &mut [f64], gain: f64) {
    for s in samples.iter_mut() {
        *s *= gain;
    }
}

/// Largest absolute sample value, 0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

/// Arithmetic mean, 0 for an empty buffer.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// # Example
/// ```
/// use foley_backend_audio::signal::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Running sum.
pub fn cumsum(samples: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    samples
        .iter()
        .map(|s| {
            acc += s;
            acc
        })
        .collect()
}

/// Stretches `points` (taken as evenly spaced over `[0, 1]`) to `n` samples
/// by linear interpolation.
pub fn resample_linear(points: &[f64], n: usize) -> Vec<f64> {
    match points.len() {
        0 => vec![0.0; n],
        1 => vec![points[0]; n],
        len => {
            let last = (len - 1) as f64;
            linspace(0.0, 1.0, n)
                .into_iter()
                .map(|x| {
                    let pos = x * last;
                    let i = (pos.floor() as usize).min(len - 2);
                    let frac = pos - i as f64;
                    points[i] + (points[i + 1] - points[i]) * frac
                })
                .collect()
        }
    }
}

/// Discrete derivative with unit spacing: central differences inside,
/// one-sided at the edges.
pub fn gradient(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| {
            if i == 0 {
                samples[1] - samples[0]
            } else if i == n - 1 {
                samples[n - 1] - samples[n - 2]
            } else {
                (samples[i + 1] - samples[i - 1]) / 2.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_base_length_rounds() {
        assert_eq!(TimeBase::new(0.3, 44100).unwrap().len(), 13230);
        assert_eq!(TimeBase::new(0.05, 44100).unwrap().len(), 2205);
        // 0.00001 s at 44.1 kHz is 0.441 samples -> rounds to zero.
        assert!(matches!(
            TimeBase::new(0.00001, 44100),
            Err(AudioError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_time_base_rejects_bad_inputs() {
        assert!(matches!(
            TimeBase::new(1.0, 0),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));
        assert!(TimeBase::new(-1.0, 44100).is_err());
        assert!(TimeBase::new(f64::INFINITY, 44100).is_err());
    }

    #[test]
    fn test_seconds_to_samples_truncates() {
        let tb = TimeBase::new(1.0, 44100).unwrap();
        assert_eq!(tb.seconds_to_samples(0.005), 220);
        assert_eq!(tb.seconds_to_samples(-1.0), 0);
    }

    #[test]
    fn test_mix_into_checks_length() {
        let mut dst = vec![1.0, 1.0];
        mix_into(&mut dst, &[1.0, 2.0], 0.5).unwrap();
        assert_eq!(dst, vec![1.5, 2.0]);
        let err = mix_into(&mut dst, &[1.0], 1.0).unwrap_err();
        assert!(matches!(err, AudioError::LengthMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_multiply_checks_length() {
        let mut dst = vec![2.0, 3.0];
        multiply(&mut dst, &[0.5, 2.0]).unwrap();
        assert_eq!(dst, vec![1.0, 6.0]);
        assert!(multiply(&mut dst, &[1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_resample_linear_endpoints() {
        let out = resample_linear(&[0.0, 1.0, 0.0], 5);
        assert_eq!(out, vec![0.0, 0.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_gradient_matches_numpy() {
        assert_eq!(gradient(&[1.0, 2.0, 4.0, 7.0]), vec![1.0, 1.5, 2.5, 3.0]);
        assert_eq!(gradient(&[5.0]), vec![0.0]);
    }

    #[test]
    fn test_cumsum_and_mean() {
        assert_eq!(cumsum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(peak(&[0.2, -0.9, 0.5]), 0.9);
    }
}
