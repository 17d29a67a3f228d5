//! Graph-building operations.
//!
//! Each `*_op` computes its output from the operands' current data and
//! records an [`Op`] together with the operands, so backward can evaluate the
//! local derivative later.

use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::broadcast_utils::{broadcast_offsets, broadcast_shapes};
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

pub mod activation;
pub mod arithmetic;
pub mod indexing;
pub mod linalg;
pub mod math_elem;
pub mod reduction;

/// Elementwise single-operand op.
pub(crate) fn apply_unary_op(input: &Tensor, op: Op, kernel: impl Fn(f64) -> f64) -> Tensor {
    let (data, shape) = {
        let guard = input.read_data();
        (guard.data.iter().map(|&x| kernel(x)).collect(), guard.shape.clone())
    };
    Tensor::from_data(TensorData::from_op(data, shape, op, vec![input.clone()]))
}

/// Elementwise two-operand op with NumPy broadcasting.
pub(crate) fn apply_binary_op(
    a: &Tensor,
    b: &Tensor,
    op: Op,
    kernel: impl Fn(f64, f64) -> f64,
) -> Result<Tensor, DeepGradError> {
    let out_shape = broadcast_shapes(&a.shape(), &b.shape())?;
    Ok(broadcast_binary(a, b, out_shape, op, kernel))
}

/// Kernel of [`apply_binary_op`] once `out_shape` is known to be valid.
pub(crate) fn broadcast_binary(
    a: &Tensor,
    b: &Tensor,
    out_shape: Vec<usize>,
    op: Op,
    kernel: impl Fn(f64, f64) -> f64,
) -> Tensor {
    let (a_data, a_shape) = {
        let guard = a.read_data();
        (guard.data.clone(), guard.shape.clone())
    };
    let (b_data, b_shape) = {
        let guard = b.read_data();
        (guard.data.clone(), guard.shape.clone())
    };
    let map_a = broadcast_offsets(&a_shape, &out_shape);
    let map_b = broadcast_offsets(&b_shape, &out_shape);
    let data = map_a
        .iter()
        .zip(&map_b)
        .map(|(&ia, &ib)| kernel(a_data[ia], b_data[ib]))
        .collect();
    Tensor::from_data(TensorData::from_op(data, out_shape, op, vec![a.clone(), b.clone()]))
}
