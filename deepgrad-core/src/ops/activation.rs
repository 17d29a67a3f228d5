use super::apply_unary_op;
use crate::autograd::backward_op::{gelu, softmax_row_len};
use crate::autograd::Op;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// `max(0, x)`. The derivative at exactly 0 is taken as 0.
pub fn relu_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Relu, |x| if x > 0.0 { x } else { 0.0 })
}

pub fn leaky_relu_op(a: &Tensor, alpha: f64) -> Tensor {
    apply_unary_op(a, Op::LeakyRelu { alpha }, move |x| if x > 0.0 { x } else { alpha * x })
}

/// GeLU, tanh approximation.
pub fn gelu_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Gelu, gelu)
}

pub fn sigmoid_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Sigmoid, |x| 1.0 / (1.0 + (-x).exp()))
}

pub fn tanh_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, Op::Tanh, f64::tanh)
}

/// Softmax over the last axis; each row is shifted by its max first.
///
/// A 1-D tensor is a single row, a 0-d tensor normalizes to 1.
pub fn softmax_op(a: &Tensor) -> Tensor {
    let (data, shape) = {
        let guard = a.read_data();
        (guard.data.clone(), guard.shape.clone())
    };
    let row_len = softmax_row_len(&shape);
    let mut out = vec![0.0; data.len()];
    if row_len > 0 {
        for (row_in, row_out) in data.chunks(row_len).zip(out.chunks_mut(row_len)) {
            let max = row_in.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mut total = 0.0;
            for (o, &x) in row_out.iter_mut().zip(row_in) {
                *o = (x - max).exp();
                total += *o;
            }
            row_out.iter_mut().for_each(|o| *o /= total);
        }
    }
    Tensor::from_data(TensorData::from_op(out, shape, Op::Softmax, vec![a.clone()]))
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
