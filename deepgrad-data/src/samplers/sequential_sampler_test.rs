use super::*;

#[test]
fn test_sequential_sampler_order() {
    let mut sampler = SequentialSampler::new();
    assert_eq!(sampler.indices(4), vec![0, 1, 2, 3]);
    assert_eq!(sampler.indices(4), vec![0, 1, 2, 3]);
}

#[test]
fn test_sequential_sampler_empty() {
    assert!(SequentialSampler::new().indices(0).is_empty());
}
