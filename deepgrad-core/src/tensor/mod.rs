// src/tensor/mod.rs

use crate::autograd::graph::{run_backward, NodeId};
use crate::error::DeepGradError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod broadcast_utils;
pub mod create;
mod methods;
mod traits;
pub mod utils;

pub use create::{from_values, full, one_hot, ones, zeros};

/// A node of the computation graph holding a row-major `f64` array.
///
/// `Tensor` is a handle: cloning it shares the same node (`Arc`), and the
/// `RwLock` lets gradients and optimizer updates mutate the node through
/// shared references.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a leaf tensor from row-major data and a shape.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, DeepGradError> {
        let tensor_data = TensorData::new(data, shape)?;
        Ok(Self::from_data(tensor_data))
    }

    /// Creates a 0-dimensional leaf tensor.
    pub fn scalar(value: f64) -> Self {
        Self::from_data(TensorData::from_op(
            vec![value],
            Vec::new(),
            crate::autograd::Op::Leaf,
            Vec::new(),
        ))
    }

    pub(crate) fn from_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Identity of the underlying node, stable for the node's lifetime.
    pub(crate) fn id(&self) -> NodeId {
        Arc::as_ptr(&self.data) as NodeId
    }

    /// Returns true if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Acquires a read lock on the node.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    pub fn ndim(&self) -> usize {
        self.read_data().shape.len()
    }

    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Copy of the row-major data.
    pub fn data(&self) -> Vec<f64> {
        self.read_data().data.clone()
    }

    /// Copy of the accumulated gradient, same layout as `data()`.
    pub fn grad(&self) -> Vec<f64> {
        self.read_data().grad.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Reads one element by multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<f64, DeepGradError> {
        let guard = self.read_data();
        let flat = utils::flat_index(index, &guard.shape)?;
        Ok(guard.data[flat])
    }

    /// Overwrites one element of the node's data by multi-dimensional index.
    ///
    /// Like optimizer updates, this does not record a graph operation.
    pub fn set(&self, index: &[usize], value: f64) -> Result<(), DeepGradError> {
        let mut guard = self.write_data();
        let flat = utils::flat_index(index, &guard.shape)?;
        guard.data[flat] = value;
        Ok(())
    }

    /// The single element of a one-element tensor.
    pub fn item(&self) -> Result<f64, DeepGradError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![],
                actual: guard.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(guard.data[0])
    }

    /// Replaces the node's data in place, keeping its shape.
    pub fn assign(&self, data: Vec<f64>) -> Result<(), DeepGradError> {
        let mut guard = self.write_data();
        if data.len() != guard.numel() {
            return Err(DeepGradError::TensorCreationError {
                data_len: data.len(),
                shape: guard.shape.clone(),
            });
        }
        guard.data = data;
        Ok(())
    }

    /// Resets the accumulated gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad.iter_mut().for_each(|g| *g = 0.0);
    }

    /// Propagates gradients from this node to every ancestor.
    ///
    /// With `gradient == None` the tensor must hold exactly one element and is
    /// seeded with 1. Otherwise the seed must have the same shape as `self`.
    /// Gradients add into whatever is already stored; call `zero_grad` between
    /// passes to start fresh.
    pub fn backward(&self, gradient: Option<&Tensor>) -> Result<(), DeepGradError> {
        let seed = match gradient {
            None => {
                if self.numel() != 1 {
                    return Err(DeepGradError::BackwardNonScalar);
                }
                vec![1.0]
            }
            Some(g) => {
                let (expected, actual) = (self.shape(), g.shape());
                if expected != actual {
                    return Err(DeepGradError::ShapeMismatch {
                        expected,
                        actual,
                        operation: "backward".to_string(),
                    });
                }
                g.data()
            }
        };
        if seed.iter().any(|s| !s.is_finite()) {
            log::warn!("backward seeded with a non-finite gradient");
        }
        run_backward(self, seed)
    }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tests;
