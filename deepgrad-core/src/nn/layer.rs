use crate::error::DeepGradError;
use crate::nn::{Activation, Neuron};
use crate::tensor::from_values;
use crate::value::Value;
use rand::Rng;

/// `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    activation: Activation,
}

impl Layer {
    /// Creates `nout` neurons over `nin` inputs. With `Activation::Softmax`
    /// the neurons stay linear and their outputs are normalized jointly.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Neuron::new`].
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, DeepGradError> {
        // Softmax couples the outputs, so neurons stay linear and the layer
        // normalizes their outputs together.
        let neuron_activation = match activation {
            Activation::Softmax => Activation::Identity,
            other => other,
        };
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, neuron_activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, activation })
    }

    pub fn from_neurons(neurons: Vec<Neuron>, activation: Activation) -> Self {
        Layer { neurons, activation }
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, DeepGradError> {
        if self.activation == Activation::Softmax {
            let pre = self
                .neurons
                .iter()
                .map(|n| n.pre_activation(inputs))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(from_values(&pre).softmax().to_values());
        }
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    pub fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
