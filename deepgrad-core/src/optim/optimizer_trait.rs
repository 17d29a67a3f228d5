use crate::error::DeepGradError;

/// Common interface of all optimizers.
pub trait Optimizer {
    /// Applies one update to every managed parameter using its stored
    /// gradient. Does not build graph nodes and does not clear gradients.
    fn step(&mut self) -> Result<(), DeepGradError>;

    /// Clears the gradients of all managed parameters.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), DeepGradError>;
}
