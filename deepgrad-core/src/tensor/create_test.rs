use super::*;
use crate::value::Value;

#[test]
fn test_zeros_ones_full() {
    let z = zeros(&[2, 3]);
    assert_eq!(z.shape(), vec![2, 3]);
    assert!(z.data().iter().all(|&x| x == 0.0));
    assert!(ones(&[4]).data().iter().all(|&x| x == 1.0));
    let f = full(&[], 2.5);
    assert_eq!(f.shape(), Vec::<usize>::new());
    assert_eq!(f.data(), vec![2.5]);
    assert!(f.is_leaf());
}

#[test]
fn test_from_values_builds_graph() {
    let a = Value::new(1.0);
    let b = Value::new(-2.0);
    let t = from_values(&[a.clone(), b.clone()]);
    assert_eq!(t.shape(), vec![2]);
    assert_eq!(t.data(), vec![1.0, -2.0]);
    assert!(!t.is_leaf());

    t.backward(Some(&Tensor::new(vec![3.0, 4.0], vec![2]).unwrap()))
        .unwrap();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 4.0);
}

#[test]
fn test_one_hot() {
    let t = one_hot(&[2, 0], 3).unwrap();
    assert_eq!(t.shape(), vec![2, 3]);
    assert_eq!(t.data(), vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_one_hot_rejects_bad_class() {
    assert!(matches!(
        one_hot(&[3], 3),
        Err(DeepGradError::IndexOutOfBounds { .. })
    ));
}
