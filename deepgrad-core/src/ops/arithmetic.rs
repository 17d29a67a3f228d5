use super::{apply_binary_op, apply_unary_op};
use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::Tensor;

pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, DeepGradError> {
    apply_binary_op(a, b, Op::Add, |x, y| x + y)
}

pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, DeepGradError> {
    apply_binary_op(a, b, Op::Sub, |x, y| x - y)
}

pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, DeepGradError> {
    apply_binary_op(a, b, Op::Mul, |x, y| x * y)
}

/// Elementwise division. Division by zero follows IEEE-754 (±inf or NaN).
pub fn div_op(a: &Tensor, b: &Tensor) -> Result<Tensor, DeepGradError> {
    apply_binary_op(a, b, Op::Div, |x, y| x / y)
}

/// `a + c` with `c` recorded as a constant leaf.
pub fn add_scalar_op(a: &Tensor, c: f64) -> Tensor {
    let shape = a.shape();
    super::broadcast_binary(a, &Tensor::scalar(c), shape, Op::Add, |x, y| x + y)
}

/// `a * c` with `c` recorded as a constant leaf.
pub fn mul_scalar_op(a: &Tensor, c: f64) -> Tensor {
    let shape = a.shape();
    super::broadcast_binary(a, &Tensor::scalar(c), shape, Op::Mul, |x, y| x * y)
}

pub fn neg_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Neg, |x| -x)
}

/// Raises every element to a real power.
///
/// # Errors
/// `DomainError` when an element is negative and `exponent` is not an
/// integer, or an element is non-positive and `exponent` is not finite.
pub fn pow_op(a: &Tensor, exponent: f64) -> Result<Tensor, DeepGradError> {
    let fractional = exponent.fract() != 0.0;
    let offending = a
        .read_data()
        .data
        .iter()
        .copied()
        .find(|&x| (x < 0.0 && fractional) || (x <= 0.0 && !exponent.is_finite()));
    if let Some(x) = offending {
        return Err(DeepGradError::DomainError {
            operation: "pow".to_string(),
            message: format!("base {} cannot be raised to exponent {}", x, exponent),
        });
    }
    Ok(apply_unary_op(a, Op::Pow { exponent }, |x| x.powf(exponent)))
}

/// Integer power, defined for every base.
pub fn powi_op(a: &Tensor, exponent: i32) -> Tensor {
    apply_unary_op(
        a,
        Op::Pow {
            exponent: exponent as f64,
        },
        |x| x.powi(exponent),
    )
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
