use crate::error::DeepGradError;
use crate::nn::init;
use crate::nn::Activation;
use crate::value::Value;
use rand::Rng;

/// One unit of the scalar network: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Weights are drawn from `U(-1, 1)`, the bias starts at 0.
    ///
    /// # Errors
    ///
    /// Propagates initializer errors; none occur for the fixed `U(-1, 1)` range.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Result<Self, DeepGradError> {
        let weights = init::uniform(nin, -1.0, 1.0, rng)?
            .into_iter()
            .map(Value::new)
            .collect();
        Ok(Neuron {
            weights,
            bias: Value::new(0.0),
            activation,
        })
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// The affine part `sum_i w_i * x_i + b`.
    pub fn pre_activation(&self, inputs: &[Value]) -> Result<Value, DeepGradError> {
        if inputs.len() != self.weights.len() {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![self.weights.len()],
                actual: vec![inputs.len()],
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut acc = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            acc = acc + w * x;
        }
        Ok(acc)
    }

    pub fn forward(&self, inputs: &[Value]) -> Result<Value, DeepGradError> {
        let pre = self.pre_activation(inputs)?;
        Ok(self.activation.apply_value(&pre))
    }

    /// Weights in input order, then the bias.
    pub fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
