pub mod feed_forward;
pub mod non_linear;

pub use feed_forward::FeedForwardLayer;
pub use non_linear::{GeLU, LeakyReLU, ReLU, Sigmoid, SoftMax, Tanh};
