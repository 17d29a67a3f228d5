use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Matrix product of 1-D or 2-D tensors.
///
/// A 1-D left operand is a row vector `(1, k)` and a 1-D right operand a
/// column vector `(k, 1)`; those unit axes are dropped from the result, so
/// `(k) x (k, n) -> (n)`, `(m, k) x (k) -> (m)` and `(k) x (k) -> ()`.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, DeepGradError> {
    let (a_shape, b_shape) = (a.shape(), b.shape());
    let incompatible = || DeepGradError::IncompatibleShapes {
        shape1: a_shape.clone(),
        shape2: b_shape.clone(),
        operation: "matmul".to_string(),
    };

    let (m, k) = match a_shape.as_slice() {
        [k] => (1, *k),
        [m, k] => (*m, *k),
        _ => return Err(incompatible()),
    };
    let (k2, n) = match b_shape.as_slice() {
        [k2] => (*k2, 1),
        [k2, n] => (*k2, *n),
        _ => return Err(incompatible()),
    };
    if k != k2 {
        return Err(incompatible());
    }

    let mut out_shape = Vec::with_capacity(2);
    if a_shape.len() == 2 {
        out_shape.push(m);
    }
    if b_shape.len() == 2 {
        out_shape.push(n);
    }

    // Separate snapshots: `a` and `b` may be the same node.
    let (a_data, b_data) = (a.data(), b.data());
    let mut data = vec![0.0; m * n];
    for i in 0..m {
        for p in 0..k {
            let aip = a_data[i * k + p];
            for j in 0..n {
                data[i * n + j] += aip * b_data[p * n + j];
            }
        }
    }
    Ok(Tensor::from_data(TensorData::from_op(
        data,
        out_shape,
        Op::MatMul { m, k, n },
        vec![a.clone(), b.clone()],
    )))
}

#[cfg(test)]
#[path = "linalg_test.rs"]
mod tests;
