use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::tensor::utils::flat_index;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Selects one element as a 0-d tensor that stays connected to `a`.
pub fn index_op(a: &Tensor, index: &[usize]) -> Result<Tensor, DeepGradError> {
    let (flat, value) = {
        let guard = a.read_data();
        let flat = flat_index(index, &guard.shape)?;
        (flat, guard.data[flat])
    };
    Ok(select_flat(a, flat, value))
}

/// Splits `a` into one connected scalar per element, row-major.
pub fn unbind_elements(a: &Tensor) -> Vec<Tensor> {
    let data = a.data();
    data.into_iter()
        .enumerate()
        .map(|(flat, value)| select_flat(a, flat, value))
        .collect()
}

fn select_flat(a: &Tensor, flat: usize, value: f64) -> Tensor {
    Tensor::from_data(TensorData::from_op(
        vec![value],
        Vec::new(),
        Op::Index { flat },
        vec![a.clone()],
    ))
}
