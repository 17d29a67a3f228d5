use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{RandomSampler, SequentialSampler};

fn collect_epoch<D: Dataset, S: Sampler>(loader: &mut DataLoader<D, S>) -> Vec<Vec<D::Item>> {
    loader
        .batches()
        .collect::<Result<Vec<_>, _>>()
        .expect("Batch should not error")
}

#[test]
fn test_dataloader_sequential() {
    let mut loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5, 6]), 2, SequentialSampler::new(), false).unwrap();
    let batches = collect_epoch(&mut loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_keeps_partial_last_batch() {
    let mut loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), false).unwrap();
    let batches = collect_epoch(&mut loader);
    assert_eq!(batches.last(), Some(&vec![5]));
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_drop_last() {
    let mut loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), true).unwrap();
    let batches = collect_epoch(&mut loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(loader.num_batches(), 2);
}

#[test]
fn test_dataloader_zero_batch_size() {
    let result = DataLoader::new(VecDataset::new(vec![1]), 0, SequentialSampler::new(), false);
    assert!(matches!(result, Err(DeepGradError::ConfigurationError(_))));
}

#[test]
fn test_dataloader_empty_dataset() {
    let mut loader = DataLoader::new(VecDataset::<i32>::new(Vec::new()), 4, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.batches().count(), 0);
    assert_eq!(loader.num_batches(), 0);
}

#[test]
fn test_dataloader_random_epochs_cover_dataset() {
    let data: Vec<usize> = (0..10).collect();
    let mut loader = DataLoader::new(VecDataset::new(data), 3, RandomSampler::new(9), false).unwrap();
    let first: Vec<usize> = collect_epoch(&mut loader).into_iter().flatten().collect();
    let second: Vec<usize> = collect_epoch(&mut loader).into_iter().flatten().collect();

    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    assert_ne!(first, second);
}
