use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};

/// Clamps every gradient element of `parameters` into `[-clip_value, clip_value]`.
///
/// # Errors
/// `ConfigurationError` if `clip_value` is negative or NaN.
pub fn clip_grad_value_(parameters: &[Parameter], clip_value: f64) -> Result<(), DeepGradError> {
    if clip_value.is_nan() || clip_value < 0.0 {
        return Err(DeepGradError::ConfigurationError(
            "clip_value must be non-negative".to_string(),
        ));
    }
    for param in parameters {
        param
            .write_data()
            .grad
            .iter_mut()
            .for_each(|g| *g = g.clamp(-clip_value, clip_value));
    }
    Ok(())
}

/// Rescales all gradients of `parameters` so their global L2 norm is at most
/// `max_norm`. Returns the norm measured before clipping.
///
/// A node listed more than once counts once toward the norm and is scaled
/// once.
///
/// # Errors
/// `ConfigurationError` if `max_norm` is negative or NaN.
pub fn clip_grad_norm_(parameters: &[Parameter], max_norm: f64) -> Result<f64, DeepGradError> {
    if max_norm.is_nan() || max_norm < 0.0 {
        return Err(DeepGradError::ConfigurationError(
            "max_norm must be non-negative".to_string(),
        ));
    }
    let parameters = dedup_parameters(parameters.to_vec());
    let total_norm = parameters
        .iter()
        .map(|p| p.read_data().grad.iter().map(|g| g * g).sum::<f64>())
        .sum::<f64>()
        .sqrt();

    const EPS: f64 = 1e-6;
    if total_norm > max_norm {
        let scale = max_norm / (total_norm + EPS);
        log::debug!("clip_grad_norm_: norm {} scaled by {}", total_norm, scale);
        for param in &parameters {
            param.write_data().grad.iter_mut().for_each(|g| *g *= scale);
        }
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
