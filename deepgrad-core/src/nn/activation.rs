use crate::tensor::Tensor;
use crate::value::Value;
use std::fmt;

/// Nonlinearity applied after a layer's affine map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    Identity,
    Relu,
    LeakyRelu { alpha: f64 },
    Gelu,
    Sigmoid,
    Tanh,
    /// Normalizes over the last axis; on a lone scalar this is the constant 1.
    Softmax,
}

impl Activation {
    pub fn apply(&self, x: &Tensor) -> Tensor {
        match self {
            Activation::Identity => x.clone(),
            Activation::Relu => x.relu(),
            Activation::LeakyRelu { alpha } => x.leaky_relu(*alpha),
            Activation::Gelu => x.gelu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Tanh => x.tanh(),
            Activation::Softmax => x.softmax(),
        }
    }

    pub fn apply_value(&self, x: &Value) -> Value {
        match self {
            Activation::Identity => x.clone(),
            Activation::Relu => x.relu(),
            Activation::LeakyRelu { alpha } => x.leaky_relu(*alpha),
            Activation::Gelu => x.gelu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Tanh => x.tanh(),
            Activation::Softmax => Value::from_scalar_tensor(x.as_tensor().softmax()),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => write!(f, "Identity"),
            Activation::Relu => write!(f, "ReLU"),
            Activation::LeakyRelu { alpha } => write!(f, "LeakyReLU(alpha={})", alpha),
            Activation::Gelu => write!(f, "GeLU"),
            Activation::Sigmoid => write!(f, "Sigmoid"),
            Activation::Tanh => write!(f, "Tanh"),
            Activation::Softmax => write!(f, "SoftMax"),
        }
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
