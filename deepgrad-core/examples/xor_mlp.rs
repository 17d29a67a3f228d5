//! # Training a small MLP on XOR
//!
//! Builds the same 2-4-1 network twice:
//! 1. as a scalar [`Mlp`] of `Value` neurons, trained with plain SGD;
//! 2. as a tensor [`Model`] of `FeedForwardLayer`s, trained with Adam.
//!
//! Run with `cargo run --example xor_mlp`.

use deepgrad_core::nn::losses::{binary_cross_entropy, mse_loss};
use deepgrad_core::nn::{Activation, Mlp, Module};
use deepgrad_core::optim::{Adam, Optimizer, Sgd};
use deepgrad_core::tensor::from_values;
use deepgrad_core::{DeepGradError, Model, Tensor, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const TARGETS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

fn train_scalar_mlp(rng: &mut StdRng) -> Result<(), DeepGradError> {
    let mlp = Mlp::new(&[2, 4, 1], &[Activation::Tanh, Activation::Sigmoid], rng)?;
    let mut optimizer = Sgd::new(Module::parameters(&mlp), 0.5)?;
    let target = Tensor::new(TARGETS.to_vec(), vec![4])?;

    for epoch in 0..500 {
        let mut preds = Vec::with_capacity(INPUTS.len());
        for row in INPUTS {
            let x: Vec<Value> = row.iter().map(|&v| Value::new(v)).collect();
            preds.extend(mlp.forward(&x)?);
        }
        let loss = mse_loss(&from_values(&preds), &target)?;
        loss.backward(None)?;
        optimizer.step()?;
        optimizer.zero_grad();

        if epoch % 100 == 0 {
            println!("[mlp] epoch {:>3}, mse {:.5}", epoch, loss.item()?);
        }
    }

    for row in INPUTS {
        let x: Vec<Value> = row.iter().map(|&v| Value::new(v)).collect();
        let out = mlp.forward(&x)?;
        println!("[mlp] {:?} -> {:.3}", row, out[0].data());
    }
    Ok(())
}

fn train_tensor_model(rng: &mut StdRng) -> Result<(), DeepGradError> {
    let model = Model::feed_forward(&[2, 4, 1], &[Activation::Tanh, Activation::Sigmoid], rng)?;
    println!("{}", model);
    let mut optimizer = Adam::with_lr(model.parameters(), 0.05)?;

    let x = Tensor::new(INPUTS.concat(), vec![4, 2])?;
    let y = Tensor::new(TARGETS.to_vec(), vec![4, 1])?;

    for epoch in 0..300 {
        let pred = model.forward(&x)?;
        let loss = binary_cross_entropy(&pred, &y)?;
        loss.backward(None)?;
        optimizer.step()?;
        model.zero_grad();

        if epoch % 50 == 0 {
            println!("[model] epoch {:>3}, bce {:.5}", epoch, loss.item()?);
        }
    }
    println!("[model] predictions {:?}", model.forward(&x)?.data());
    Ok(())
}

fn main() -> Result<(), DeepGradError> {
    let mut rng = StdRng::seed_from_u64(42);
    train_scalar_mlp(&mut rng)?;
    train_tensor_model(&mut rng)?;
    Ok(())
}
