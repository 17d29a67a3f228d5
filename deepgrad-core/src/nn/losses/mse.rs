use super::{check_same_shape, warn_if_not_finite};
use crate::error::DeepGradError;
use crate::tensor::Tensor;

/// Mean squared error `mean((pred - target)^2)`. Shapes must be identical.
pub fn mse_loss(pred: &Tensor, target: &Tensor) -> Result<Tensor, DeepGradError> {
    check_same_shape(pred, target, "mse_loss")?;
    let loss = pred.sub(target)?.powi(2).mean();
    warn_if_not_finite(&loss, "mse_loss");
    Ok(loss)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
