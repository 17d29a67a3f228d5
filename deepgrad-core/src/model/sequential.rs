use crate::error::DeepGradError;
use crate::nn::mlp::validate_widths;
use crate::nn::parameter::dedup_parameters;
use crate::nn::{Activation, FeedForwardLayer, Module, Parameter};
use crate::tensor::Tensor;
use rand::Rng;
use std::fmt;

/// An ordered stack of modules applied one after another.
#[derive(Debug, Default)]
pub struct Model {
    layers: Vec<Box<dyn Module>>,
}

impl Model {
    pub fn new(layers: Vec<Box<dyn Module>>) -> Self {
        Model { layers }
    }

    /// Dense network with `widths = [nin, h1, ..., nout]` and one activation
    /// per layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for the same width and activation
    /// problems as [`crate::nn::Mlp::new`].
    pub fn feed_forward<R: Rng + ?Sized>(
        widths: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, DeepGradError> {
        validate_widths(widths, activations)?;
        let mut model = Model::default();
        for (w, &act) in widths.windows(2).zip(activations) {
            model.push(Box::new(FeedForwardLayer::new(w[0], w[1], act, rng)?));
        }
        Ok(model)
    }

    pub fn push(&mut self, layer: Box<dyn Module>) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Box<dyn Module>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Module for Model {
    fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Every layer's parameters in layer order, names prefixed by the layer
    /// position (`"0.weight"`, `"0.bias"`, ...). A node shared by several
    /// layers is listed once, at its first position.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            for mut param in layer.parameters() {
                param.name = Some(match param.name.take() {
                    Some(name) => format!("{}.{}", index, name),
                    None => index.to_string(),
                });
                params.push(param);
            }
        }
        dedup_parameters(params)
    }

    fn describe(&self) -> String {
        format!("Model({} layers)", self.layers.len())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model(")?;
        for (index, layer) in self.layers.iter().enumerate() {
            writeln!(f, "  ({}): {}", index, layer.describe())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
