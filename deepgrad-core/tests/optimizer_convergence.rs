use deepgrad_core::nn::init::normal;
use deepgrad_core::nn::losses::binary_cross_entropy;
use deepgrad_core::nn::{Activation, Mlp, Module};
use deepgrad_core::optim::{clip_grad_norm_, Adam, Momentum, Optimizer, Sgd};
use deepgrad_core::tensor::from_values;
use deepgrad_core::{DeepGradError, Model, Tensor, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{block_means, tensor};

/// Two Gaussian blobs around (-1, -1) and (1, 1); label 1 for the second.
fn separable_blobs(n_per_class: usize, seed: u64) -> (Tensor, Tensor) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = normal(n_per_class * 4, 0.0, 0.3, &mut rng).unwrap();
    let mut xs = Vec::with_capacity(n_per_class * 4);
    let mut ys = Vec::with_capacity(n_per_class * 2);
    for i in 0..n_per_class * 2 {
        let (center, label) = if i % 2 == 0 { (-1.0, 0.0) } else { (1.0, 1.0) };
        xs.push(center + noise[2 * i]);
        xs.push(center + noise[2 * i + 1]);
        ys.push(label);
    }
    (
        tensor(xs, vec![n_per_class * 2, 2]),
        tensor(ys, vec![n_per_class * 2, 1]),
    )
}

fn train(model: &Model, opt: &mut dyn Optimizer, x: &Tensor, y: &Tensor, steps: usize) -> Result<Vec<f64>, DeepGradError> {
    let mut losses = Vec::with_capacity(steps);
    for _ in 0..steps {
        let pred = model.forward(x)?;
        let loss = binary_cross_entropy(&pred, y)?;
        losses.push(loss.item()?);
        loss.backward(None)?;
        opt.step()?;
        model.zero_grad();
    }
    Ok(losses)
}

#[test]
fn adam_two_layer_mlp_smoothed_bce_decreases() -> Result<(), DeepGradError> {
    let (x, y) = separable_blobs(20, 17);
    let mut rng = StdRng::seed_from_u64(2024);
    let model = Model::feed_forward(&[2, 8, 1], &[Activation::Tanh, Activation::Sigmoid], &mut rng)?;
    let mut opt = Adam::with_lr(model.parameters(), 0.05)?;

    let losses = train(&model, &mut opt, &x, &y, 200)?;
    let smoothed = block_means(&losses, 25);
    for pair in smoothed.windows(2) {
        assert!(pair[1] < pair[0] + 1e-3, "smoothed loss went up: {:?}", smoothed);
    }
    assert!(smoothed[smoothed.len() - 1] < 0.5 * smoothed[0]);
    assert!(losses[losses.len() - 1] < 0.2);
    Ok(())
}

#[test]
fn adam_scalar_mlp_learns_blobs() -> Result<(), DeepGradError> {
    let (x, y) = separable_blobs(8, 5);
    let mut rng = StdRng::seed_from_u64(99);
    let mlp = Mlp::new(&[2, 4, 1], &[Activation::Relu, Activation::Sigmoid], &mut rng)?;
    let mut opt = Adam::with_lr(Module::parameters(&mlp), 0.05)?;

    let rows: Vec<Vec<Value>> = (0..16)
        .map(|r| vec![Value::new(x.get(&[r, 0]).unwrap()), Value::new(x.get(&[r, 1]).unwrap())])
        .collect();
    let target = tensor(y.data(), vec![16]);

    let mut losses = Vec::new();
    for _ in 0..120 {
        let mut preds = Vec::with_capacity(rows.len());
        for row in &rows {
            preds.extend(mlp.forward(row)?);
        }
        let loss = binary_cross_entropy(&from_values(&preds), &target)?;
        losses.push(loss.item()?);
        loss.backward(None)?;
        opt.step()?;
        mlp.zero_grad();
    }
    let smoothed = block_means(&losses, 20);
    assert!(smoothed[smoothed.len() - 1] < smoothed[0]);
    Ok(())
}

#[test]
fn sgd_and_momentum_with_clipping_reduce_loss() -> Result<(), DeepGradError> {
    let (x, y) = separable_blobs(10, 3);
    for use_momentum in [false, true] {
        let mut rng = StdRng::seed_from_u64(7);
        let model = Model::feed_forward(&[2, 4, 1], &[Activation::Tanh, Activation::Sigmoid], &mut rng)?;
        let params = model.parameters();
        let mut opt: Box<dyn Optimizer> = if use_momentum {
            Box::new(Momentum::new(params.clone(), 0.1, 0.9)?)
        } else {
            Box::new(Sgd::new(params.clone(), 0.5)?)
        };

        let mut losses = Vec::new();
        for _ in 0..100 {
            let loss = binary_cross_entropy(&model.forward(&x)?, &y)?;
            losses.push(loss.item()?);
            loss.backward(None)?;
            clip_grad_norm_(&params, 5.0)?;
            opt.step()?;
            opt.zero_grad();
        }
        let smoothed = block_means(&losses, 20);
        assert!(smoothed[smoothed.len() - 1] < smoothed[0], "{:?}", smoothed);
    }
    Ok(())
}
