use super::{validate_beta, validate_eps, validate_lr, zeroed_state};
use crate::error::DeepGradError;
use crate::nn::{dedup_parameters, Parameter};
use crate::optim::Optimizer;

/// Adam with bias-corrected first and second moment estimates.
#[derive(Debug)]
pub struct Adam {
    params: Vec<Parameter>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    iterations: u64,
    m: Vec<Vec<f64>>,
    v: Vec<Vec<f64>>,
}

impl Adam {
    pub const DEFAULT_BETA1: f64 = 0.9;
    pub const DEFAULT_BETA2: f64 = 0.999;
    pub const DEFAULT_EPS: f64 = 1e-8;

    /// Builds the optimizer over `params`. A node listed more than once is
    /// kept only at its first position, so state indices follow the
    /// deduplicated order.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite, if either
    /// beta is outside `[0, 1)`, or if `eps` is not positive.
    pub fn new(params: Vec<Parameter>, lr: f64, beta1: f64, beta2: f64, eps: f64) -> Result<Self, DeepGradError> {
        validate_lr(lr)?;
        validate_beta(beta1, "Beta1")?;
        validate_beta(beta2, "Beta2")?;
        validate_eps(eps)?;
        let params = dedup_parameters(params);
        let m = zeroed_state(&params);
        let v = zeroed_state(&params);
        Ok(Adam {
            params,
            lr,
            beta1,
            beta2,
            eps,
            iterations: 0,
            m,
            v,
        })
    }

    /// Adam with the conventional betas and epsilon.
    pub fn with_lr(params: Vec<Parameter>, lr: f64) -> Result<Self, DeepGradError> {
        Adam::new(params, lr, Self::DEFAULT_BETA1, Self::DEFAULT_BETA2, Self::DEFAULT_EPS)
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Optimizer for Adam {
    fn step(&mut self) -> Result<(), DeepGradError> {
        self.iterations += 1;
        let t = self.iterations as i32;
        let bias_correction1 = 1.0 - self.beta1.powi(t);
        let bias_correction2 = 1.0 - self.beta2.powi(t);
        log::debug!("Adam step {}: lr={}", self.iterations, self.lr);

        for ((param, m), v) in self.params.iter().zip(self.m.iter_mut()).zip(self.v.iter_mut()) {
            let mut guard = param.write_data();
            let node = &mut *guard;
            for (((x, g), m), v) in node
                .data
                .iter_mut()
                .zip(&node.grad)
                .zip(m.iter_mut())
                .zip(v.iter_mut())
            {
                *m = self.beta1 * *m + (1.0 - self.beta1) * g;
                *v = self.beta2 * *v + (1.0 - self.beta2) * g * g;
                let m_hat = *m / bias_correction1;
                let v_hat = *v / bias_correction2;
                *x -= self.lr * m_hat / (v_hat.sqrt() + self.eps);
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
#[path = "adam_test.rs"]
mod tests;
