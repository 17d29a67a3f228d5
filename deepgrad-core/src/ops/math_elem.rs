use super::apply_unary_op;
use crate::autograd::Op;
use crate::tensor::Tensor;

pub fn exp_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Exp, f64::exp)
}

/// Natural logarithm. Negative inputs give NaN, zero gives -inf.
pub fn ln_op(a: &Tensor) -> Tensor {
    log_floored_op(a, f64::NEG_INFINITY)
}

/// `ln(max(x, floor))`. Elements below the floor get zero gradient.
pub fn log_floored_op(a: &Tensor, floor: f64) -> Tensor {
    apply_unary_op(a, Op::Log { floor }, move |x| if x < floor { floor.ln() } else { x.ln() })
}

#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests;
