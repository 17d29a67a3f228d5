//! Optimizers update parameter data in place from accumulated gradients.
//! Per-parameter state lives in vectors indexed by the parameter's position
//! in the list given at construction.

pub mod adagrad;
pub mod adam;
pub mod grad_clipping;
pub mod momentum;
pub mod optimizer_trait;
pub mod rmsprop;
pub mod sgd;

pub use adagrad::AdaGrad;
pub use adam::Adam;
pub use grad_clipping::{clip_grad_norm_, clip_grad_value_};
pub use momentum::Momentum;
pub use optimizer_trait::Optimizer;
pub use rmsprop::RmsProp;
pub use sgd::Sgd;

use crate::error::DeepGradError;
use crate::nn::Parameter;

/// Zero-initialized state buffers, one per parameter.
pub(crate) fn zeroed_state(params: &[Parameter]) -> Vec<Vec<f64>> {
    params.iter().map(|p| vec![0.0; p.numel()]).collect()
}

pub(crate) fn validate_lr(lr: f64) -> Result<(), DeepGradError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(DeepGradError::ConfigurationError(
            "Learning rate must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_eps(eps: f64) -> Result<(), DeepGradError> {
    if eps.is_nan() || eps <= 0.0 {
        return Err(DeepGradError::ConfigurationError(
            "Epsilon must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_beta(beta: f64, name: &str) -> Result<(), DeepGradError> {
    if !(0.0..1.0).contains(&beta) {
        return Err(DeepGradError::ConfigurationError(format!(
            "{} must be in [0, 1)",
            name
        )));
    }
    Ok(())
}
