// Shared helpers for integration tests.
#![allow(dead_code)]

use deepgrad_core::Tensor;

pub fn tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("valid test tensor")
}

pub fn ones_like(t: &Tensor) -> Tensor {
    deepgrad_core::tensor::ones(&t.shape())
}

/// Mean of each consecutive block of `block` values.
pub fn block_means(values: &[f64], block: usize) -> Vec<f64> {
    values
        .chunks(block)
        .map(|c| c.iter().sum::<f64>() / c.len() as f64)
        .collect()
}
