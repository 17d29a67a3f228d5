use super::{check_same_shape, warn_if_not_finite, LOG_FLOOR};
use crate::error::DeepGradError;
use crate::ops::math_elem::log_floored_op;
use crate::tensor::Tensor;

/// Binary cross-entropy averaged over elements:
/// `-mean(t * ln(p) + (1 - t) * ln(1 - p))`, both logs floored at `1e-12`.
///
/// `pred` holds probabilities (e.g. sigmoid outputs); `target` has the same
/// shape with values in `[0, 1]`.
pub fn binary_cross_entropy(pred: &Tensor, target: &Tensor) -> Result<Tensor, DeepGradError> {
    check_same_shape(pred, target, "binary_cross_entropy")?;
    let log_p = log_floored_op(pred, LOG_FLOOR);
    let log_one_minus_p = log_floored_op(&pred.neg().add_scalar(1.0), LOG_FLOOR);
    let one_minus_t = target.neg().add_scalar(1.0);

    let positive = target.mul(&log_p)?;
    let negative = one_minus_t.mul(&log_one_minus_p)?;
    let loss = positive.add(&negative)?.mean().neg();
    warn_if_not_finite(&loss, "binary_cross_entropy");
    Ok(loss)
}

#[cfg(test)]
#[path = "binary_cross_entropy_test.rs"]
mod tests;
