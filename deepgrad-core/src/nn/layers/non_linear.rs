//! Parameter-free activation layers, for composing a [`crate::Model`] out of
//! linear layers and separate nonlinearities.

use crate::error::DeepGradError;
use crate::nn::{Module, Parameter};
use crate::tensor::Tensor;

macro_rules! activation_layer {
    ($name:ident, $method:ident, $label:expr) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                $name
            }
        }

        impl Module for $name {
            fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError> {
                Ok(input.$method())
            }

            fn parameters(&self) -> Vec<Parameter> {
                Vec::new()
            }

            fn describe(&self) -> String {
                $label.to_string()
            }
        }
    };
}

activation_layer!(ReLU, relu, "ReLU");
activation_layer!(GeLU, gelu, "GeLU");
activation_layer!(Sigmoid, sigmoid, "Sigmoid");
activation_layer!(Tanh, tanh, "Tanh");
activation_layer!(SoftMax, softmax, "SoftMax");

#[derive(Debug, Clone, Copy)]
pub struct LeakyReLU {
    pub alpha: f64,
}

impl LeakyReLU {
    pub const DEFAULT_ALPHA: f64 = 0.01;

    pub fn new(alpha: f64) -> Self {
        LeakyReLU { alpha }
    }
}

impl Default for LeakyReLU {
    fn default() -> Self {
        LeakyReLU::new(Self::DEFAULT_ALPHA)
    }
}

impl Module for LeakyReLU {
    fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError> {
        Ok(input.leaky_relu(self.alpha))
    }

    fn parameters(&self) -> Vec<Parameter> {
        Vec::new()
    }

    fn describe(&self) -> String {
        format!("LeakyReLU(alpha={})", self.alpha)
    }
}

#[cfg(test)]
#[path = "non_linear_test.rs"]
mod tests;
