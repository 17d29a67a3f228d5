//! Parameter initializers. All take the RNG explicitly so a seeded
//! `StdRng` gives reproducible networks.

use crate::error::DeepGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// `numel` samples from `U(low, high)`.
///
/// # Errors
/// `ConfigurationError` unless both bounds are finite and `low < high`.
pub fn uniform<R: Rng + ?Sized>(numel: usize, low: f64, high: f64, rng: &mut R) -> Result<Vec<f64>, DeepGradError> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(DeepGradError::ConfigurationError(format!(
            "uniform init requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    Ok((0..numel).map(|_| dist.sample(rng)).collect())
}

/// `numel` samples from `N(mean, std^2)`.
///
/// # Errors
/// `ConfigurationError` if `mean` is not finite or `std` is negative or not
/// finite.
pub fn normal<R: Rng + ?Sized>(numel: usize, mean: f64, std: f64, rng: &mut R) -> Result<Vec<f64>, DeepGradError> {
    if !mean.is_finite() || !std.is_finite() || std < 0.0 {
        return Err(DeepGradError::ConfigurationError(format!(
            "normal init requires finite mean and std >= 0, got mean {} std {}",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        DeepGradError::ConfigurationError(format!("normal init with std {}: {}", std, e))
    })?;
    Ok((0..numel).map(|_| dist.sample(rng)).collect())
}

/// Kaiming (He) uniform: `U(-b, b)` with `b = sqrt(6 / fan_in)`.
///
/// # Errors
/// `ConfigurationError` if `fan_in` is 0.
pub fn kaiming_uniform<R: Rng + ?Sized>(numel: usize, fan_in: usize, rng: &mut R) -> Result<Vec<f64>, DeepGradError> {
    if fan_in == 0 {
        return Err(DeepGradError::ConfigurationError(
            "kaiming_uniform requires fan_in > 0".to_string(),
        ));
    }
    let bound = (6.0 / fan_in as f64).sqrt();
    uniform(numel, -bound, bound, rng)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
