//! Reverse-mode automatic differentiation over scalar `Value`s and small
//! row-major `Tensor`s, with the layers, losses and optimizers needed to train
//! feed-forward networks.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod value;

pub use error::DeepGradError;
pub use model::Model;
pub use tensor::Tensor;
pub use value::Value;
