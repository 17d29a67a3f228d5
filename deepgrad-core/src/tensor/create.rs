use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::value::Value;

/// Creates a leaf tensor filled with `value`.
pub fn full(shape: &[usize], value: f64) -> Tensor {
    let numel: usize = shape.iter().product();
    Tensor::from_data(TensorData::from_op(
        vec![value; numel],
        shape.to_vec(),
        Op::Leaf,
        Vec::new(),
    ))
}

pub fn zeros(shape: &[usize]) -> Tensor {
    full(shape, 0.0)
}

pub fn ones(shape: &[usize]) -> Tensor {
    full(shape, 1.0)
}

/// Stacks scalar values into a 1-D tensor of length `values.len()`.
///
/// The result is a graph node: gradients flow back into each value.
pub fn from_values(values: &[Value]) -> Tensor {
    let data = values.iter().map(Value::data).collect();
    let operands = values.iter().map(|v| v.as_tensor().clone()).collect();
    Tensor::from_data(TensorData::from_op(data, vec![values.len()], Op::Stack, operands))
}

/// One-hot rows of shape `(indices.len(), num_classes)`.
pub fn one_hot(indices: &[usize], num_classes: usize) -> Result<Tensor, DeepGradError> {
    let mut data = vec![0.0; indices.len() * num_classes];
    for (row, &class) in indices.iter().enumerate() {
        if class >= num_classes {
            return Err(DeepGradError::IndexOutOfBounds {
                index: vec![class],
                shape: vec![num_classes],
            });
        }
        data[row * num_classes + class] = 1.0;
    }
    Tensor::new(data, vec![indices.len(), num_classes])
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
