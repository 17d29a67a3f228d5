//! Datasets, index samplers and mini-batch loading for `deepgrad-core`
//! training loops.

pub mod collate;
pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
