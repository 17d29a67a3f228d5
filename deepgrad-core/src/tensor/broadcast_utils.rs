use crate::error::DeepGradError;
use crate::tensor::utils::calculate_strides;

/// Computes the broadcast shape of two shapes, NumPy style.
///
/// Shapes are aligned from the right; each pair of dimensions must be equal
/// or one of them must be 1. Missing leading dimensions count as 1.
pub fn broadcast_shapes(shape1: &[usize], shape2: &[usize]) -> Result<Vec<usize>, DeepGradError> {
    let rank = shape1.len().max(shape2.len());
    let mut out = vec![0; rank];
    for i in 0..rank {
        let d1 = dim_from_right(shape1, rank - 1 - i);
        let d2 = dim_from_right(shape2, rank - 1 - i);
        out[i] = match (d1, d2) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => {
                return Err(DeepGradError::BroadcastError {
                    shape1: shape1.to_vec(),
                    shape2: shape2.to_vec(),
                })
            }
        };
    }
    Ok(out)
}

fn dim_from_right(shape: &[usize], pos_from_right: usize) -> usize {
    if pos_from_right < shape.len() {
        shape[shape.len() - 1 - pos_from_right]
    } else {
        1
    }
}

/// For every flat position of `out_shape`, the flat position of `src_shape`
/// it reads from when `src_shape` is broadcast to `out_shape`.
///
/// `out_shape` must be a valid broadcast target of `src_shape`. Summing an
/// output gradient through this map reduces it back over broadcast axes.
pub fn broadcast_offsets(src_shape: &[usize], out_shape: &[usize]) -> Vec<usize> {
    let numel: usize = out_shape.iter().product();
    if src_shape == out_shape {
        return (0..numel).collect();
    }
    let rank = out_shape.len();
    let rank_diff = rank - src_shape.len();
    let src_strides = calculate_strides(src_shape);
    // Stride 0 on broadcast axes so they all read the same source element.
    let effective: Vec<usize> = (0..rank)
        .map(|i| {
            if i < rank_diff || src_shape[i - rank_diff] == 1 {
                0
            } else {
                src_strides[i - rank_diff]
            }
        })
        .collect();

    let mut offsets = Vec::with_capacity(numel);
    let mut coords = vec![0usize; rank];
    for _ in 0..numel {
        offsets.push(coords.iter().zip(&effective).map(|(c, s)| c * s).sum());
        for axis in (0..rank).rev() {
            coords[axis] += 1;
            if coords[axis] < out_shape[axis] {
                break;
            }
            coords[axis] = 0;
        }
    }
    offsets
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
