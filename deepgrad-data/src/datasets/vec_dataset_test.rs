use super::*;

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(0).unwrap(), 10);
    assert_eq!(dataset.get(2).unwrap(), 30);
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![1.0, 2.0]);
    assert_eq!(
        dataset.get(2),
        Err(DeepGradError::IndexOutOfBounds {
            index: vec![2],
            shape: vec![2],
        })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = Vec::new().into();
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_pair_items() {
    let dataset = VecDataset::new(vec![(vec![0.0, 1.0], vec![1.0])]);
    let (x, y) = dataset.get(0).unwrap();
    assert_eq!(x, vec![0.0, 1.0]);
    assert_eq!(y, vec![1.0]);
}
