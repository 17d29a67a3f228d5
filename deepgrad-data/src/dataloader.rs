//! # DataLoader
//!
//! Groups dataset samples into mini-batches, visiting indices in the order a
//! [`Sampler`] decides.
//!
//! ```rust
//! use deepgrad_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.batches().collect::<Result<_, _>>().unwrap();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use deepgrad_core::DeepGradError;

/// Mini-batch loader over a dataset `D` with index order from `S`.
///
/// With `drop_last` set, a trailing batch smaller than `batch_size` is
/// skipped.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The dataset to draw samples from.
    /// * `batch_size` - Number of samples per batch.
    /// * `sampler` - Decides the index order of each epoch.
    /// * `drop_last` - If `true`, an incomplete trailing batch is skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `batch_size` is 0.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, DeepGradError> {
        if batch_size == 0 {
            return Err(DeepGradError::ConfigurationError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let len = self.dataset.len();
        if self.drop_last {
            len / self.batch_size
        } else {
            len.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch: asks the sampler for an index order and returns
    /// an iterator over the resulting batches.
    pub fn batches(&mut self) -> Batches<'_, D> {
        let indices = self.sampler.indices(self.dataset.len());
        log::debug!(
            "DataLoader epoch: {} samples, batch_size={}, drop_last={}",
            indices.len(),
            self.batch_size,
            self.drop_last
        );
        Batches {
            dataset: &self.dataset,
            indices: indices.into_iter(),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

/// One epoch of batches from a [`DataLoader`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: std::vec::IntoIter<usize>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, DeepGradError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<usize> = self.indices.by_ref().take(self.batch_size).collect();
        if chunk.is_empty() || (self.drop_last && chunk.len() < self.batch_size) {
            return None;
        }
        Some(chunk.into_iter().map(|idx| self.dataset.get(idx)).collect())
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
