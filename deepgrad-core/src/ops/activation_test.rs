use super::*;
use approx::assert_relative_eq;

#[test]
fn test_relu() {
    let a = Tensor::new(vec![-1.0, 0.0, 2.0], vec![3]).unwrap();
    let r = relu_op(&a);
    assert_eq!(r.data(), vec![0.0, 0.0, 2.0]);
    r.sum().backward(None).unwrap();
    assert_eq!(a.grad(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_leaky_relu() {
    let a = Tensor::new(vec![-2.0, 3.0], vec![2]).unwrap();
    let r = leaky_relu_op(&a, 0.2);
    assert_eq!(r.data(), vec![-0.4, 3.0]);
    r.sum().backward(None).unwrap();
    assert_eq!(a.grad(), vec![0.2, 1.0]);
}

#[test]
fn test_sigmoid_tanh_use_output() {
    let a = Tensor::new(vec![0.0], vec![1]).unwrap();
    let s = sigmoid_op(&a);
    assert_relative_eq!(s.data()[0], 0.5);
    s.sum().backward(None).unwrap();
    assert_relative_eq!(a.grad()[0], 0.25);

    a.zero_grad();
    let t = tanh_op(&a);
    t.sum().backward(None).unwrap();
    assert_relative_eq!(a.grad()[0], 1.0);
}

#[test]
fn test_gelu_values() {
    let a = Tensor::new(vec![-1.0, 0.0, 1.0], vec![3]).unwrap();
    let g = gelu_op(&a).data();
    assert_relative_eq!(g[0], -0.158808, epsilon = 1e-5);
    assert_relative_eq!(g[1], 0.0);
    assert_relative_eq!(g[2], 0.841192, epsilon = 1e-5);
}

#[test]
fn test_softmax_rows_sum_to_one() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 1000.0, 1000.0, 1000.0], vec![2, 3]).unwrap();
    let s = softmax_op(&a).data();
    assert_relative_eq!(s[0] + s[1] + s[2], 1.0, epsilon = 1e-12);
    for v in &s[3..] {
        assert_relative_eq!(*v, 1.0 / 3.0, epsilon = 1e-12);
    }
    assert!(s[2] > s[1] && s[1] > s[0]);
}

#[test]
fn test_softmax_scalar_is_one() {
    let a = Tensor::scalar(4.2);
    let s = softmax_op(&a);
    assert_eq!(s.data(), vec![1.0]);
    s.backward(None).unwrap();
    assert_eq!(a.grad(), vec![0.0]);
}

#[test]
fn test_softmax_weighted_grad() {
    let a = Tensor::new(vec![0.5, -0.5], vec![2]).unwrap();
    let s = softmax_op(&a);
    let sd = s.data();
    let w = Tensor::new(vec![1.0, 0.0], vec![2]).unwrap();
    s.mul(&w).unwrap().sum().backward(None).unwrap();
    assert_relative_eq!(a.grad()[0], sd[0] * (1.0 - sd[0]), epsilon = 1e-12);
    assert_relative_eq!(a.grad()[1], -sd[0] * sd[1], epsilon = 1e-12);
}
