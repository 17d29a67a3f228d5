use super::validate_lr;
use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};
use crate::optim::Optimizer;

/// Plain gradient descent, `data -= lr * grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f64,
}

impl Sgd {
    /// Builds the optimizer over `params`; a node listed more than once is
    /// updated once.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not a positive finite number.
    pub fn new(params: Vec<Parameter>, lr: f64) -> Result<Self, DeepGradError> {
        validate_lr(lr)?;
        let params = dedup_parameters(params);
        Ok(Sgd { params, lr })
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), DeepGradError> {
        log::debug!("Sgd step: lr={}, {} params", self.lr, self.params.len());
        for param in &self.params {
            let mut guard = param.write_data();
            let node = &mut *guard;
            for (x, g) in node.data.iter_mut().zip(&node.grad) {
                *x -= self.lr * g;
            }
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        self.params.iter().for_each(|p| p.zero_grad());
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), DeepGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
