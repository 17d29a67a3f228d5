use super::{validate_beta, validate_eps, validate_lr, zeroed_state};
use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};
use crate::optim::Optimizer;

/// RMSprop: AdaGrad with a decayed accumulator,
/// `sum_sq = beta * sum_sq + (1 - beta) * grad^2`.
#[derive(Debug)]
pub struct RmsProp {
    params: Vec<Parameter>,
    lr: f64,
    beta: f64,
    eps: f64,
    sum_sq: Vec<Vec<f64>>,
}

impl RmsProp {
    pub const DEFAULT_BETA: f64 = 0.9;
    pub const DEFAULT_EPS: f64 = 1e-8;

    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite, if `beta` is
    /// outside `[0, 1)`, or if `eps` is not positive.
    pub fn new(params: Vec<Parameter>, lr: f64, beta: f64, eps: f64) -> Result<Self, DeepGradError> {
        validate_lr(lr)?;
        validate_beta(beta, "RMSprop beta")?;
        validate_eps(eps)?;
        let params = dedup_parameters(params);
        let sum_sq = zeroed_state(&params);
        Ok(RmsProp {
            params,
            lr,
            beta,
            eps,
            sum_sq,
        })
    }
}

impl Optimizer for RmsProp {
    fn step(&mut self) -> Result<(), DeepGradError> {
        log::debug!("RmsProp step: lr={}, beta={}", self.lr, self.beta);
        for (param, acc) in self.params.iter().zip(self.sum_sq.iter_mut()) {
            let mut guard = param.write_data();
            let node = &mut *guard;
            for ((x, g), s) in node.data.iter_mut().zip(&node.grad).zip(acc.iter_mut()) {
                *s = self.beta * *s + (1.0 - self.beta) * g * g;
                *x -= self.lr * g / (*s + self.eps).sqrt();
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
#[path = "rmsprop_test.rs"]
mod tests;
