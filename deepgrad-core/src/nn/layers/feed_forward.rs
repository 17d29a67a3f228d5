use crate::error::DeepGradError;
use crate::nn::init::kaiming_uniform;
use crate::nn::{Activation, Module, Parameter};
use crate::tensor::{zeros, Tensor};
use rand::Rng;

/// Dense layer on tensors: `activation(x @ W + b)`.
///
/// `W` has shape `(nin, nout)` and `b` shape `(nout)`. Input is either a
/// single sample `(nin)` or a batch `(batch, nin)`.
#[derive(Debug, Clone)]
pub struct FeedForwardLayer {
    weight: Parameter,
    bias: Parameter,
    activation: Activation,
}

impl FeedForwardLayer {
    /// Creates a dense layer with Kaiming-uniform weights and a zero bias.
    ///
    /// # Arguments
    ///
    /// * `nin` - Number of input features.
    /// * `nout` - Number of output features.
    /// * `activation` - Applied to `x @ W + b`.
    /// * `rng` - Source for the weight initialization.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `nin` is 0.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, DeepGradError> {
        let weight = Tensor::new(kaiming_uniform(nin * nout, nin, rng)?, vec![nin, nout])?;
        Ok(FeedForwardLayer {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: Parameter::new(zeros(&[nout]), Some("bias".to_string())),
            activation,
        })
    }

    /// Builds a layer around existing tensors of shape `(nin, nout)` and `(nout)`.
    /// The tensors are shared, not copied.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleShapes` if `weight` is not 2-D or `bias` does not
    /// have `nout` elements.
    pub fn from_tensors(weight: Tensor, bias: Tensor, activation: Activation) -> Result<Self, DeepGradError> {
        let (w_shape, b_shape) = (weight.shape(), bias.shape());
        if w_shape.len() != 2 || b_shape != [w_shape[1]] {
            return Err(DeepGradError::IncompatibleShapes {
                shape1: w_shape,
                shape2: b_shape,
                operation: "FeedForwardLayer::from_tensors".to_string(),
            });
        }
        Ok(FeedForwardLayer {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: Parameter::new(bias, Some("bias".to_string())),
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.weight.shape()[0]
    }

    pub fn nout(&self) -> usize {
        self.weight.shape()[1]
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }
}

impl Module for FeedForwardLayer {
    fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError> {
        let shape = input.shape();
        let features = match shape.as_slice() {
            [f] | [_, f] => *f,
            _ => 0,
        };
        if features != self.nin() {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![self.nin()],
                actual: shape,
                operation: "FeedForwardLayer::forward".to_string(),
            });
        }
        let affine = input.matmul(&self.weight)?.add(&self.bias)?;
        Ok(self.activation.apply(&affine))
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![self.weight.clone(), self.bias.clone()]
    }

    fn describe(&self) -> String {
        format!(
            "FeedForwardLayer(nin={}, nout={}, activation={})",
            self.nin(),
            self.nout(),
            self.activation
        )
    }
}

#[cfg(test)]
#[path = "feed_forward_test.rs"]
mod tests;
