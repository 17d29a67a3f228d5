// src/tensor_data.rs
use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Storage and graph metadata of one node.
///
/// Wrapped in `Arc<RwLock<TensorData>>` by [`Tensor`]. `data` and `grad`
/// always have the same length, the product of `shape` (an empty shape holds
/// one element). `operands` is empty exactly when `op` is [`Op::Leaf`].
#[derive(Debug)]
pub struct TensorData {
    pub(crate) data: Vec<f64>,
    pub(crate) grad: Vec<f64>,
    pub(crate) shape: Vec<usize>,
    pub(crate) op: Op,
    pub(crate) operands: Vec<Tensor>,
}

impl TensorData {
    /// Creates a leaf node from row-major data.
    ///
    /// # Errors
    /// Returns `DeepGradError::TensorCreationError` if the length of `data` does not
    /// match the number of elements of `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, DeepGradError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(DeepGradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Self::from_op(data, shape, Op::Leaf, Vec::new()))
    }

    /// Builds a node from already validated parts.
    pub(crate) fn from_op(data: Vec<f64>, shape: Vec<usize>, op: Op, operands: Vec<Tensor>) -> Self {
        let grad = vec![0.0; data.len()];
        TensorData {
            data,
            grad,
            shape,
            op,
            operands,
        }
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

impl Drop for TensorData {
    /// Releases operand chains iteratively so long graphs cannot overflow the
    /// stack when their last handle goes away.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(tensor) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(tensor.data) {
                if let Ok(mut node) = lock.into_inner() {
                    pending.append(&mut node.operands);
                }
            }
        }
    }
}
