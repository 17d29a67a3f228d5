use super::*;

#[test]
fn test_check_grad_passes_for_correct_op() {
    let a = Tensor::new(vec![0.3, -1.2, 2.0], vec![3]).unwrap();
    let b = Tensor::new(vec![1.5, 0.7, -0.4], vec![3]).unwrap();
    let seed = Tensor::new(vec![1.0, -0.5, 2.0], vec![3]).unwrap();
    let result = check_grad(
        |inputs| Ok(inputs[0].mul(&inputs[1])?.tanh()),
        &[a.clone(), b],
        &seed,
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "{:?}", result);
    // Inputs are restored after perturbation.
    assert_eq!(a.data(), vec![0.3, -1.2, 2.0]);
}

#[test]
fn test_check_grad_rejects_non_leaf() {
    let a = Tensor::new(vec![1.0], vec![1]).unwrap();
    let not_leaf = a.mul_scalar(2.0);
    let seed = Tensor::new(vec![1.0], vec![1]).unwrap();
    let err = check_grad(|i| Ok(i[0].clone()), &[not_leaf], &seed, 1e-6, 1e-5).unwrap_err();
    assert_eq!(err, GradCheckError::InputNotLeaf { input_index: 0 });
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    // Forward uses the current data, backward sees a detached copy: the
    // analytical gradient is zero while the numerical one is not.
    let a = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    let seed = Tensor::new(vec![1.0, 1.0], vec![2]).unwrap();
    let err = check_grad(
        |i| Tensor::new(i[0].data(), i[0].shape()),
        &[a],
        &seed,
        1e-6,
        1e-5,
    )
    .unwrap_err();
    assert!(matches!(err, GradCheckError::GradientMismatch { .. }));
}
