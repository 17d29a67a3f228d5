use super::*;

#[test]
fn test_calculate_strides() {
    assert_eq!(calculate_strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(calculate_strides(&[5]), vec![1]);
    assert!(calculate_strides(&[]).is_empty());
}

#[test]
fn test_flat_index_multi_dim() {
    assert_eq!(flat_index(&[1, 2], &[2, 3]).unwrap(), 5);
    assert_eq!(flat_index(&[0, 0], &[2, 3]).unwrap(), 0);
    assert_eq!(flat_index(&[], &[]).unwrap(), 0);
}

#[test]
fn test_flat_index_accepts_flat_offset() {
    assert_eq!(flat_index(&[4], &[2, 3]).unwrap(), 4);
}

#[test]
fn test_flat_index_out_of_bounds() {
    let err = flat_index(&[2, 0], &[2, 3]).unwrap_err();
    assert_eq!(
        err,
        DeepGradError::IndexOutOfBounds {
            index: vec![2, 0],
            shape: vec![2, 3]
        }
    );
    assert!(flat_index(&[6], &[2, 3]).is_err());
    assert!(flat_index(&[0, 0, 0], &[2, 3]).is_err());
}
