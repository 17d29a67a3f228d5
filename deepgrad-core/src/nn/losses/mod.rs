//! Loss functions. Each returns a 0-d tensor that is part of the graph, so
//! `loss.backward(None)` reaches the model parameters.

pub mod binary_cross_entropy;
pub mod cross_entropy;
pub mod mse;

pub use binary_cross_entropy::binary_cross_entropy;
pub use cross_entropy::{cross_entropy, cross_entropy_with_logits, ClassTarget};
pub use mse::mse_loss;

/// Smallest probability passed to `ln` by the log-based losses.
pub const LOG_FLOOR: f64 = 1e-12;

use crate::error::DeepGradError;
use crate::tensor::Tensor;

pub(crate) fn check_same_shape(pred: &Tensor, target: &Tensor, operation: &str) -> Result<(), DeepGradError> {
    let (expected, actual) = (pred.shape(), target.shape());
    if expected != actual {
        return Err(DeepGradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn warn_if_not_finite(loss: &Tensor, name: &str) {
    if loss.read_data().data.iter().any(|v| !v.is_finite()) {
        log::warn!("{} produced a non-finite loss", name);
    }
}
