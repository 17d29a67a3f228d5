use thiserror::Error;

/// Error type shared by every fallible operation in deepgrad.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DeepGradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Incompatible shapes for operation {operation}: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Backward called on non-scalar tensor without explicit gradient.")]
    BackwardNonScalar,

    #[error("Domain error in {operation}: {message}")]
    DomainError { operation: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DeepGradError {
    /// True for the shape family (mismatch, incompatible, broadcast, creation, index).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            DeepGradError::ShapeMismatch { .. }
                | DeepGradError::IncompatibleShapes { .. }
                | DeepGradError::BroadcastError { .. }
                | DeepGradError::TensorCreationError { .. }
                | DeepGradError::IndexOutOfBounds { .. }
        )
    }
}
