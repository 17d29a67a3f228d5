use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_shapes_and_parameter_order() -> Result<(), DeepGradError> {
    let mut rng = StdRng::seed_from_u64(11);
    let layer = Layer::new(3, 2, Activation::Tanh, &mut rng)?;
    assert_eq!(layer.nin(), 3);
    assert_eq!(layer.nout(), 2);
    let out = layer.forward(&[Value::new(1.0), Value::new(0.0), Value::new(-1.0)])?;
    assert_eq!(out.len(), 2);

    let params = layer.parameters();
    assert_eq!(params.len(), 8);
    let again = layer.parameters();
    for (a, b) in params.iter().zip(&again) {
        assert!(a.as_tensor().ptr_eq(b.as_tensor()));
    }
    Ok(())
}

#[test]
fn test_softmax_layer_normalizes_jointly() -> Result<(), DeepGradError> {
    let layer = Layer::from_neurons(
        vec![
            Neuron::from_weights(vec![1.0], 0.0, Activation::Identity),
            Neuron::from_weights(vec![2.0], 0.0, Activation::Identity),
        ],
        Activation::Softmax,
    );
    let out = layer.forward(&[Value::new(1.0)])?;
    let total: f64 = out.iter().map(Value::data).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    let e1 = 1.0f64.exp();
    let e2 = 2.0f64.exp();
    assert_relative_eq!(out[1].data(), e2 / (e1 + e2), epsilon = 1e-12);
    Ok(())
}
