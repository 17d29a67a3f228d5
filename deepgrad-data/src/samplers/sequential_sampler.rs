use super::traits::Sampler;

/// Visits indices in order, `0..len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn indices(&mut self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
