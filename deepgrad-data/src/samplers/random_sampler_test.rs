use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_is_permutation() {
    let mut sampler = RandomSampler::new(3);
    let indices = sampler.indices(50);
    assert_eq!(indices.len(), 50);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 50);
    assert!(indices.iter().all(|&i| i < 50));
}

#[test]
fn test_random_sampler_same_seed_same_epochs() {
    let mut a = RandomSampler::new(11);
    let mut b = RandomSampler::new(11);
    for _ in 0..3 {
        assert_eq!(a.indices(20), b.indices(20));
    }
}

#[test]
fn test_random_sampler_new_order_each_epoch() {
    let mut sampler = RandomSampler::new(5);
    let first = sampler.indices(30);
    let second = sampler.indices(30);
    assert_ne!(first, second);
}

#[test]
fn test_random_sampler_empty() {
    assert!(RandomSampler::new(0).indices(0).is_empty());
}
