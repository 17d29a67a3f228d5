use crate::error::DeepGradError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// A network building block: maps a tensor to a tensor and owns zero or
/// more parameters.
pub trait Module: std::fmt::Debug + Send + Sync {
    fn forward(&self, input: &Tensor) -> Result<Tensor, DeepGradError>;

    /// Trainable parameters in creation order. The order is stable across
    /// calls, so optimizers can index their state by position.
    fn parameters(&self) -> Vec<Parameter>;

    /// One-line description used when printing a model.
    fn describe(&self) -> String;

    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
