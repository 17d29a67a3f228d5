pub mod activation;
pub mod init;
pub mod layer;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;
pub mod parameter;

pub use activation::Activation;
pub use layer::Layer;
pub use layers::{FeedForwardLayer, GeLU, LeakyReLU, ReLU, Sigmoid, SoftMax, Tanh};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use parameter::{dedup_parameters, Parameter};
