use super::{validate_beta, validate_lr, zeroed_state};
use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};
use crate::optim::Optimizer;

/// Gradient descent with a velocity buffer:
/// `v = beta * v + grad; data -= lr * v`.
#[derive(Debug)]
pub struct Momentum {
    params: Vec<Parameter>,
    lr: f64,
    beta: f64,
    velocity: Vec<Vec<f64>>,
}

impl Momentum {
    pub const DEFAULT_BETA: f64 = 0.9;

    /// One velocity buffer per distinct parameter node, in first-seen order.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite, or `beta` is
    /// outside `[0, 1)`.
    pub fn new(params: Vec<Parameter>, lr: f64, beta: f64) -> Result<Self, DeepGradError> {
        validate_lr(lr)?;
        validate_beta(beta, "Momentum beta")?;
        let params = dedup_parameters(params);
        let velocity = zeroed_state(&params);
        Ok(Momentum {
            params,
            lr,
            beta,
            velocity,
        })
    }

    /// Velocity of the parameter at `index`.
    pub fn velocity(&self, index: usize) -> Option<&[f64]> {
        self.velocity.get(index).map(Vec::as_slice)
    }
}

impl Optimizer for Momentum {
    fn step(&mut self) -> Result<(), DeepGradError> {
        log::debug!("Momentum step: lr={}, beta={}", self.lr, self.beta);
        for (param, v) in self.params.iter().zip(self.velocity.iter_mut()) {
            let mut guard = param.write_data();
            let node = &mut *guard;
            for ((x, g), v) in node.data.iter_mut().zip(&node.grad).zip(v.iter_mut()) {
                *v = self.beta * *v + g;
                *x -= self.lr * *v;
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
#[path = "momentum_test.rs"]
mod tests;
