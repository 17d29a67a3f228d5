use crate::autograd::Op;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Sum of all elements as a 0-d tensor.
pub fn sum_op(a: &Tensor) -> Tensor {
    let total = a.read_data().data.iter().sum();
    Tensor::from_data(TensorData::from_op(vec![total], Vec::new(), Op::Sum, vec![a.clone()]))
}

/// Mean of all elements as a 0-d tensor; NaN for an empty tensor.
pub fn mean_op(a: &Tensor) -> Tensor {
    let mean = {
        let guard = a.read_data();
        guard.data.iter().sum::<f64>() / guard.data.len() as f64
    };
    Tensor::from_data(TensorData::from_op(vec![mean], Vec::new(), Op::Mean, vec![a.clone()]))
}

#[cfg(test)]
#[path = "reduction_test.rs"]
mod tests;
