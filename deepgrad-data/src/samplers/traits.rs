use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Indices for one epoch over a dataset of `dataset_len` samples.
    ///
    /// Takes `&mut self` so stateful samplers can produce a fresh order on
    /// every call.
    fn indices(&mut self, dataset_len: usize) -> Vec<usize>;
}
