use crate::error::DeepGradError;
use crate::tensor::Tensor;
use thiserror::Error;

/// Failures reported by [`check_grad`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Gradient check input {input_index} must be a leaf node.")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is not finite for input {input_index}, element {element_index}: loss+ {loss_plus}, loss- {loss_minus}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Tensor error during gradient check: {0}")]
    TensorError(#[from] DeepGradError),
}

/// Compares backward gradients with central differences.
///
/// `func` is evaluated on `inputs`; the scalar objective is
/// `sum(func(inputs) * output_grad)`, so `output_grad` plays the role of the
/// backward seed. Each input element is perturbed by `±epsilon` in place and
/// restored afterwards. An element fails when
/// `|analytical - numerical| > tolerance * (1 + |numerical|)`.
///
/// Input gradients are zeroed before the analytical pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &Tensor,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, DeepGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    output.backward(Some(output_grad))?;
    let analytical: Vec<Vec<f64>> = inputs.iter().map(Tensor::grad).collect();
    let seed = output_grad.data();

    let objective = |inputs: &[Tensor]| -> Result<f64, DeepGradError> {
        let out = func(inputs)?;
        Ok(out.data().iter().zip(&seed).map(|(y, g)| y * g).sum())
    };

    for (input_index, input) in inputs.iter().enumerate() {
        let original = input.data();
        for element_index in 0..original.len() {
            let mut shifted = original.clone();
            shifted[element_index] = original[element_index] + epsilon;
            input.assign(shifted.clone())?;
            let loss_plus = objective(inputs)?;

            shifted[element_index] = original[element_index] - epsilon;
            input.assign(shifted)?;
            let loss_minus = objective(inputs)?;
            input.assign(original.clone())?;

            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }
            let analytical_grad = analytical[input_index][element_index];
            let difference = (analytical_grad - numerical).abs();
            if difference > tolerance * (1.0 + numerical.abs()) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad: numerical,
                    difference,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
