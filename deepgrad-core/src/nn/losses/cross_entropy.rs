use super::{check_same_shape, warn_if_not_finite, LOG_FLOOR};
use crate::error::DeepGradError;
use crate::ops::math_elem::log_floored_op;
use crate::tensor::Tensor;

/// Class labels for [`cross_entropy`].
#[derive(Debug, Clone, Copy)]
pub enum ClassTarget<'a> {
    /// One class index; the prediction must be a single row.
    Index(usize),
    /// One class index per row.
    Indices(&'a [usize]),
    /// Target distribution with the same shape as the prediction.
    OneHot(&'a Tensor),
}

/// Cross-entropy of predicted probabilities against class targets.
///
/// `probs` is 1-D (one row) or 2-D `(batch, classes)` and must already be a
/// probability distribution per row. Computes `-sum_i t_i * ln(max(p_i, 1e-12))`
/// per row and averages over rows.
pub fn cross_entropy(probs: &Tensor, target: ClassTarget<'_>) -> Result<Tensor, DeepGradError> {
    let shape = probs.shape();
    let (rows, classes) = match shape.as_slice() {
        [c] => (1, *c),
        [r, c] => (*r, *c),
        _ => {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![0, 0],
                actual: shape,
                operation: "cross_entropy".to_string(),
            })
        }
    };

    let target_tensor = match target {
        ClassTarget::OneHot(t) => {
            check_same_shape(probs, t, "cross_entropy")?;
            t.clone()
        }
        ClassTarget::Index(class) => encode(&[class], rows, classes, &shape)?,
        ClassTarget::Indices(indices) => encode(indices, rows, classes, &shape)?,
    };

    let log_probs = log_floored_op(probs, LOG_FLOOR);
    let per_element = target_tensor.mul(&log_probs)?;
    let loss = per_element.sum().mul_scalar(-1.0 / rows as f64);
    warn_if_not_finite(&loss, "cross_entropy");
    Ok(loss)
}

/// Applies softmax over the last axis of `logits`, then [`cross_entropy`].
pub fn cross_entropy_with_logits(logits: &Tensor, target: ClassTarget<'_>) -> Result<Tensor, DeepGradError> {
    cross_entropy(&logits.softmax(), target)
}

fn encode(indices: &[usize], rows: usize, classes: usize, shape: &[usize]) -> Result<Tensor, DeepGradError> {
    if indices.len() != rows {
        return Err(DeepGradError::InvalidTarget(format!(
            "{} class indices for {} rows",
            indices.len(),
            rows
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= classes) {
        return Err(DeepGradError::InvalidTarget(format!(
            "class index {} out of range for {} classes",
            bad, classes
        )));
    }
    let mut data = vec![0.0; rows * classes];
    for (row, &class) in indices.iter().enumerate() {
        data[row * classes + class] = 1.0;
    }
    Tensor::new(data, shape.to_vec())
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
