use crate::error::DeepGradError;

/// Row-major strides of a contiguous shape.
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// Converts a multi-dimensional index into a flat row-major offset.
///
/// A one-element index into a tensor of any rank is accepted as a flat offset
/// so elements can be addressed either way.
pub fn flat_index(index: &[usize], shape: &[usize]) -> Result<usize, DeepGradError> {
    let numel: usize = shape.iter().product();
    let out_of_bounds = || DeepGradError::IndexOutOfBounds {
        index: index.to_vec(),
        shape: shape.to_vec(),
    };

    if index.len() == shape.len() {
        let strides = calculate_strides(shape);
        let mut flat = 0;
        for ((&i, &dim), &stride) in index.iter().zip(shape).zip(&strides) {
            if i >= dim {
                return Err(out_of_bounds());
            }
            flat += i * stride;
        }
        return Ok(flat);
    }
    if index.len() == 1 && index[0] < numel {
        return Ok(index[0]);
    }
    Err(out_of_bounds())
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
