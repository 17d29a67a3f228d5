use crate::error::DeepGradError;
use crate::nn::parameter::dedup_parameters;
use crate::nn::{Activation, Layer, Module, Parameter};
use crate::tensor::{from_values, Tensor};
use crate::value::Value;
use rand::Rng;

/// Multi-layer perceptron over scalar [`Value`]s.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// `widths = [nin, h1, ..., nout]` with one activation per layer
    /// (`widths.len() - 1` of them).
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if fewer than two widths are given, a
    /// width is 0 or the activation count does not match the layer count.
    pub fn new<R: Rng + ?Sized>(
        widths: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, DeepGradError> {
        validate_widths(widths, activations)?;
        let layers = widths
            .windows(2)
            .zip(activations)
            .map(|(w, &act)| Layer::new(w[0], w[1], act, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, DeepGradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    pub fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}

/// Checks a `[nin, ..., nout]` width list against its activations.
pub(crate) fn validate_widths(widths: &[usize], activations: &[Activation]) -> Result<(), DeepGradError> {
    if widths.len() < 2 {
        return Err(DeepGradError::ConfigurationError(format!(
            "network needs at least input and output widths, got {:?}",
            widths
        )));
    }
    if activations.len() != widths.len() - 1 {
        return Err(DeepGradError::ConfigurationError(format!(
            "{} layers need {} activations, got {}",
            widths.len() - 1,
            widths.len() - 1,
            activations.len()
        )));
    }
    if widths.iter().any(|&w| w == 0) {
        return Err(DeepGradError::ConfigurationError(format!(
            "layer widths must be positive, got {:?}",
            widths
        )));
    }
    Ok(())
}

impl Module for Mlp {
    /// Accepts a 1-D tensor of length `nin` and returns a 1-D output.
    fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError> {
        let shape = input.shape();
        if shape != [self.nin()] {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![self.nin()],
                actual: shape,
                operation: "Mlp::forward".to_string(),
            });
        }
        let out = Mlp::forward(self, &input.to_values())?;
        Ok(from_values(&out))
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        for (l, layer) in self.layers.iter().enumerate() {
            for (n, neuron) in layer.neurons().iter().enumerate() {
                let values = neuron.parameters();
                let bias_pos = values.len() - 1;
                for (i, v) in values.iter().enumerate() {
                    let name = if i == bias_pos {
                        format!("layers.{}.neurons.{}.bias", l, n)
                    } else {
                        format!("layers.{}.neurons.{}.w{}", l, n, i)
                    };
                    params.push(Parameter::from_value(v, Some(name)));
                }
            }
        }
        dedup_parameters(params)
    }

    fn describe(&self) -> String {
        let layers: Vec<String> = self
            .layers
            .iter()
            .map(|l| format!("{}->{} {}", l.nin(), l.nout(), l.activation()))
            .collect();
        format!("Mlp[{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
