//! Range checks shared by every effect's `validate`.
//!
//! Each helper returns `ParamError::InvalidParameter` naming the offending
//! field, so a rejected request points at the exact key to fix.

use crate::error::ParamError;

/// Longest clip accepted, in seconds. Buffers are built in memory.
pub const MAX_DURATION_SECONDS: f64 = 120.0;

/// Highest sample rate accepted, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Validates a clip duration.
///
/// # Example
/// ```
/// use foley_spec::validation::check_duration;
///
/// assert!(check_duration(0.3).is_ok());
/// assert!(check_duration(-1.0).is_err());
/// ```
pub fn check_duration(duration: f64) -> Result<(), ParamError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ParamError::invalid_param(
            "duration",
            format!("must be a positive number of seconds, got {}", duration),
        ));
    }
    if duration > MAX_DURATION_SECONDS {
        return Err(ParamError::invalid_param(
            "duration",
            format!("must be at most {} seconds, got {}", MAX_DURATION_SECONDS, duration),
        ));
    }
    Ok(())
}

/// Validates a sample rate.
pub fn check_sample_rate(sample_rate: u32) -> Result<(), ParamError> {
    if sample_rate == 0 || sample_rate > MAX_SAMPLE_RATE {
        return Err(ParamError::invalid_param(
            "sample_rate",
            format!("must be 1-{} Hz, got {}", MAX_SAMPLE_RATE, sample_rate),
        ));
    }
    Ok(())
}

/// Validates an output volume (peak amplitude).
pub fn check_volume(volume: f64) -> Result<(), ParamError> {
    check_range("volume", volume, 0.0, 1.0)
}

/// Validates that `value` lies in `[min, max]`.
pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ParamError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ParamError::invalid_param(
            name,
            format!("must be {}-{}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Validates that `value` is finite and strictly positive.
pub fn check_positive(name: &str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ParamError::invalid_param(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Validates a frequency: positive and below Nyquist.
///
/// # Example
/// ```
/// use foley_spec::validation::check_frequency;
///
/// assert!(check_frequency("base_freq", 800.0, 44100).is_ok());
/// assert!(check_frequency("base_freq", 22050.0, 44100).is_err());
/// ```
pub fn check_frequency(name: &str, hz: f64, sample_rate: u32) -> Result<(), ParamError> {
    check_positive(name, hz)?;
    let nyquist = sample_rate as f64 / 2.0;
    if hz >= nyquist {
        return Err(ParamError::invalid_param(
            name,
            format!("must be below Nyquist ({} Hz), got {}", nyquist, hz),
        ));
    }
    Ok(())
}

/// Validates the optional smoothing cutoff.
pub fn check_cutoff(cutoff: Option<f64>, sample_rate: u32) -> Result<(), ParamError> {
    match cutoff {
        Some(hz) => check_frequency("cutoff", hz, sample_rate),
        None => Ok(()),
    }
}

/// Validates the fields every effect carries.
pub fn check_common(
    duration: f64,
    volume: f64,
    cutoff: Option<f64>,
    sample_rate: u32,
) -> Result<(), ParamError> {
    check_sample_rate(sample_rate)?;
    check_duration(duration)?;
    check_volume(volume)?;
    check_cutoff(cutoff, sample_rate)
}

/// Validates an ordered frequency band.
pub fn check_band(
    low_name: &str,
    low: f64,
    high_name: &str,
    high: f64,
    sample_rate: u32,
) -> Result<(), ParamError> {
    check_frequency(low_name, low, sample_rate)?;
    check_frequency(high_name, high, sample_rate)?;
    if low > high {
        return Err(ParamError::invalid_param(
            low_name,
            format!("must not exceed {} ({}), got {}", high_name, high, low),
        ));
    }
    Ok(())
}
