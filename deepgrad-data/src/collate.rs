use deepgrad_core::{DeepGradError, Tensor};

/// Stacks `(input, target)` rows into a `(batch, nin)` input tensor and a
/// `(batch, nout)` target tensor.
///
/// All inputs must share one length, and all targets another.
///
/// # Errors
///
/// Returns `ShapeMismatch` for a row whose input or target length differs
/// from the first row, and `ConfigurationError` for an empty batch.
pub fn stack_pairs(batch: &[(Vec<f64>, Vec<f64>)]) -> Result<(Tensor, Tensor), DeepGradError> {
    let (first_x, first_y) = batch.first().ok_or_else(|| {
        DeepGradError::ConfigurationError("cannot collate an empty batch".to_string())
    })?;
    let (nin, nout) = (first_x.len(), first_y.len());

    let mut xs = Vec::with_capacity(batch.len() * nin);
    let mut ys = Vec::with_capacity(batch.len() * nout);
    for (x, y) in batch {
        if x.len() != nin {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![nin],
                actual: vec![x.len()],
                operation: "stack_pairs inputs".to_string(),
            });
        }
        if y.len() != nout {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![nout],
                actual: vec![y.len()],
                operation: "stack_pairs targets".to_string(),
            });
        }
        xs.extend_from_slice(x);
        ys.extend_from_slice(y);
    }

    Ok((
        Tensor::new(xs, vec![batch.len(), nin])?,
        Tensor::new(ys, vec![batch.len(), nout])?,
    ))
}

#[cfg(test)]
#[path = "collate_test.rs"]
mod tests;
