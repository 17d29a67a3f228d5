use deepgrad_core::autograd::grad_check::check_grad;
use deepgrad_core::nn::losses::{binary_cross_entropy, cross_entropy_with_logits, mse_loss, ClassTarget};
use deepgrad_core::nn::{Activation, FeedForwardLayer, Module};
use deepgrad_core::{DeepGradError, Tensor};

mod common;
use common::{ones_like, tensor};

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-4;

fn check_unary(data: Vec<f64>, shape: Vec<usize>, f: impl Fn(&Tensor) -> Result<Tensor, DeepGradError>) {
    let x = tensor(data, shape);
    let sample_out = f(&x).unwrap();
    let seed = tensor(
        (0..sample_out.numel()).map(|i| 0.5 + 0.25 * i as f64).collect(),
        sample_out.shape(),
    );
    let result = check_grad(|i| f(&i[0]), &[x], &seed, EPS, TOL);
    assert!(result.is_ok(), "{:?}", result);
}

fn check_binary(
    a: (Vec<f64>, Vec<usize>),
    b: (Vec<f64>, Vec<usize>),
    f: impl Fn(&Tensor, &Tensor) -> Result<Tensor, DeepGradError>,
) {
    let (a, b) = (tensor(a.0, a.1), tensor(b.0, b.1));
    let sample_out = f(&a, &b).unwrap();
    let seed = tensor(
        (0..sample_out.numel()).map(|i| 1.0 - 0.3 * i as f64).collect(),
        sample_out.shape(),
    );
    let result = check_grad(|i| f(&i[0], &i[1]), &[a, b], &seed, EPS, TOL);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn grad_check_elementwise_binary_ops() {
    let a = (vec![0.5, -1.5, 2.0, 0.7, 1.1, -0.3], vec![2, 3]);
    let b = (vec![1.2, 0.8, -2.5, 0.4, -1.0, 3.0], vec![2, 3]);
    check_binary(a.clone(), b.clone(), |x, y| x.add(y));
    check_binary(a.clone(), b.clone(), |x, y| x.sub(y));
    check_binary(a.clone(), b.clone(), |x, y| x.mul(y));
    check_binary(a, b, |x, y| x.div(y));
}

#[test]
fn grad_check_broadcasting() {
    let m = (vec![0.5, -1.5, 2.0, 0.7, 1.1, -0.3], vec![2, 3]);
    check_binary(m.clone(), (vec![1.0, -2.0, 0.5], vec![3]), |x, y| x.mul(y));
    check_binary(m.clone(), (vec![2.0, -0.5], vec![2, 1]), |x, y| x.div(y));
    check_binary(m, (vec![0.9], vec![]), |x, y| x.sub(y));
}

#[test]
fn grad_check_unary_math() {
    let positive = vec![0.4, 1.3, 2.2, 0.9];
    check_unary(positive.clone(), vec![4], |x| Ok(x.ln()));
    check_unary(positive.clone(), vec![2, 2], |x| x.pow(1.7));
    check_unary(positive.clone(), vec![4], |x| Ok(x.powi(3)));
    check_unary(vec![-1.0, 0.2, 1.5], vec![3], |x| Ok(x.exp()));
    check_unary(vec![-1.0, 0.2, 1.5], vec![3], |x| Ok(x.neg().add_scalar(2.0).mul_scalar(0.5)));
}

#[test]
fn grad_check_activations() {
    let xs = vec![-1.7, -0.4, 0.3, 1.2, 2.5, -2.2];
    check_unary(xs.clone(), vec![6], |x| Ok(x.relu()));
    check_unary(xs.clone(), vec![6], |x| Ok(x.leaky_relu(0.05)));
    check_unary(xs.clone(), vec![6], |x| Ok(x.gelu()));
    check_unary(xs.clone(), vec![6], |x| Ok(x.sigmoid()));
    check_unary(xs.clone(), vec![6], |x| Ok(x.tanh()));
    check_unary(xs.clone(), vec![6], |x| Ok(x.softmax()));
    check_unary(xs, vec![2, 3], |x| Ok(x.softmax()));
}

#[test]
fn grad_check_matmul_and_reductions() {
    check_binary(
        (vec![0.5, -1.5, 2.0, 0.7, 1.1, -0.3], vec![2, 3]),
        (vec![1.0, 0.2, -0.7, 0.4, 0.9, -1.3], vec![3, 2]),
        |x, y| x.matmul(y),
    );
    check_binary(
        (vec![0.5, -1.5, 2.0], vec![3]),
        (vec![1.0, 0.2, -0.7, 0.4, 0.9, -1.3], vec![3, 2]),
        |x, y| x.matmul(y),
    );
    check_unary(vec![1.0, -2.0, 3.0, 0.5], vec![2, 2], |x| Ok(x.sum()));
    check_unary(vec![1.0, -2.0, 3.0, 0.5], vec![2, 2], |x| Ok(x.mean()));
}

#[test]
fn grad_check_losses() {
    let target = tensor(vec![0.5, -1.0, 2.0], vec![3]);
    check_unary(vec![0.1, 0.4, 1.9], vec![3], |x| mse_loss(x, &target));

    check_unary(vec![1.0, -0.5, 2.0, 0.3, 0.0, -1.2], vec![2, 3], |x| {
        cross_entropy_with_logits(x, ClassTarget::Indices(&[2, 0]))
    });

    let labels = tensor(vec![1.0, 0.0, 1.0], vec![3]);
    check_unary(vec![0.3, -1.1, 2.0], vec![3], |x| {
        binary_cross_entropy(&x.sigmoid(), &labels)
    });
}

#[test]
fn grad_check_feed_forward_layer() {
    let w = tensor(vec![0.2, -0.4, 0.7, 0.1, -0.3, 0.5], vec![3, 2]);
    let b = tensor(vec![0.05, -0.02], vec![2]);
    let x = tensor(vec![1.0, -0.5, 0.25, 0.3, 0.8, -1.1], vec![2, 3]);
    let f = |inputs: &[Tensor]| {
        let layer = FeedForwardLayer::from_tensors(inputs[0].clone(), inputs[1].clone(), Activation::Tanh)?;
        layer.forward(&inputs[2])
    };
    let seed = ones_like(&f(&[w.clone(), b.clone(), x.clone()]).unwrap());
    let result = check_grad(f, &[w, b, x], &seed, EPS, TOL);
    assert!(result.is_ok(), "{:?}", result);
}
