use super::{validate_eps, validate_lr, zeroed_state};
use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};
use crate::optim::Optimizer;

/// AdaGrad: `sum_sq += grad^2; data -= lr * grad / sqrt(sum_sq + eps)`.
#[derive(Debug)]
pub struct AdaGrad {
    params: Vec<Parameter>,
    lr: f64,
    eps: f64,
    sum_sq: Vec<Vec<f64>>,
}

impl AdaGrad {
    pub const DEFAULT_EPS: f64 = 1e-8;

    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite, or `eps` is
    /// not positive.
    pub fn new(params: Vec<Parameter>, lr: f64, eps: f64) -> Result<Self, DeepGradError> {
        validate_lr(lr)?;
        validate_eps(eps)?;
        let params = dedup_parameters(params);
        let sum_sq = zeroed_state(&params);
        Ok(AdaGrad {
            params,
            lr,
            eps,
            sum_sq,
        })
    }

    /// Accumulated squared gradients of the parameter at `index`.
    pub fn sum_sq(&self, index: usize) -> Option<&[f64]> {
        self.sum_sq.get(index).map(Vec::as_slice)
    }
}

impl Optimizer for AdaGrad {
    fn step(&mut self) -> Result<(), DeepGradError> {
        log::debug!("AdaGrad step: lr={}, eps={}", self.lr, self.eps);
        for (param, acc) in self.params.iter().zip(self.sum_sq.iter_mut()) {
            let mut guard = param.write_data();
            let node = &mut *guard;
            for ((x, g), s) in node.data.iter_mut().zip(&node.grad).zip(acc.iter_mut()) {
                *s += g * g;
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
#[path = "adagrad_test.rs"]
mod tests;
