use super::traits::Dataset;
use deepgrad_core::DeepGradError;

/// A dataset backed by a `Vec` of samples. `get` clones the sample.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<T, DeepGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| DeepGradError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.data.len()],
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
