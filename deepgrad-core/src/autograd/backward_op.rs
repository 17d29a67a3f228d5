use crate::error::DeepGradError;
use crate::tensor::broadcast_utils::broadcast_offsets;

/// The operation that produced a node, with whatever it needs to evaluate its
/// local derivative later.
///
/// Binary elementwise variants broadcast their operands; their gradients are
/// summed back to each operand's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow { exponent: f64 },
    Exp,
    /// Natural log of `max(x, floor)`; `floor = -inf` is a plain `ln`.
    Log { floor: f64 },
    Relu,
    LeakyRelu { alpha: f64 },
    Gelu,
    Sigmoid,
    Tanh,
    /// Softmax over the last axis.
    Softmax,
    /// `(m, k) x (k, n)` on the flattened operands.
    MatMul { m: usize, k: usize, n: usize },
    Sum,
    Mean,
    /// Scalars stacked into a 1-D tensor.
    Stack,
    /// Selects one element (by flat offset) as a scalar.
    Index { flat: usize },
}

/// Data and shape of one operand, read at backward time.
#[derive(Debug, Clone)]
pub struct OperandView {
    pub data: Vec<f64>,
    pub shape: Vec<usize>,
}

/// Everything a local rule sees while processing one node.
pub struct BackwardContext<'a> {
    pub grad_output: &'a [f64],
    pub output: &'a [f64],
    pub output_shape: &'a [usize],
    pub operands: &'a [OperandView],
}

pub(crate) const SQRT_2_OVER_PI: f64 = 0.797_884_560_802_865_4;
pub(crate) const GELU_COEFF: f64 = 0.044_715;

impl Op {
    /// Number of operands this operation records, `None` when variable.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Op::Leaf => Some(0),
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::MatMul { .. } => Some(2),
            Op::Stack => None,
            _ => Some(1),
        }
    }

    /// Gradient contribution to each operand, in operand order and shaped
    /// like the operand.
    pub fn backward(&self, ctx: &BackwardContext) -> Result<Vec<Vec<f64>>, DeepGradError> {
        if let Some(expected) = self.arity() {
            if ctx.operands.len() != expected {
                return Err(DeepGradError::InternalError(format!(
                    "{:?} expects {} operands, node has {}",
                    self,
                    expected,
                    ctx.operands.len()
                )));
            }
        }
        let g = ctx.grad_output;

        let grads = match self {
            Op::Leaf => Vec::new(),
            Op::Add => binary_grads(ctx, |_, _, g| (g, g)),
            Op::Sub => binary_grads(ctx, |_, _, g| (g, -g)),
            Op::Mul => binary_grads(ctx, |a, b, g| (g * b, g * a)),
            Op::Div => binary_grads(ctx, |a, b, g| (g / b, -g * a / (b * b))),
            Op::Neg => vec![g.iter().map(|g| -g).collect()],
            Op::Pow { exponent } => {
                let p = *exponent;
                vec![unary_grads(ctx, |x, _, g| {
                    if p == 0.0 {
                        0.0
                    } else {
                        g * p * x.powf(p - 1.0)
                    }
                })]
            }
            Op::Exp => vec![unary_grads(ctx, |_, y, g| g * y)],
            Op::Log { floor } => {
                let floor = *floor;
                vec![unary_grads(ctx, |x, _, g| if x < floor { 0.0 } else { g / x })]
            }
            Op::Relu => vec![unary_grads(ctx, |x, _, g| if x > 0.0 { g } else { 0.0 })],
            Op::LeakyRelu { alpha } => {
                let alpha = *alpha;
                vec![unary_grads(ctx, |x, _, g| if x > 0.0 { g } else { alpha * g })]
            }
            Op::Gelu => vec![unary_grads(ctx, |x, _, g| g * gelu_derivative(x))],
            Op::Sigmoid => vec![unary_grads(ctx, |_, s, g| g * s * (1.0 - s))],
            Op::Tanh => vec![unary_grads(ctx, |_, t, g| g * (1.0 - t * t))],
            Op::Softmax => vec![softmax_grad(ctx.output, ctx.output_shape, g)],
            Op::MatMul { m, k, n } => {
                let (a, b) = (&ctx.operands[0].data, &ctx.operands[1].data);
                let (m, k, n) = (*m, *k, *n);
                let mut ga = vec![0.0; m * k];
                let mut gb = vec![0.0; k * n];
                for i in 0..m {
                    for p in 0..k {
                        for j in 0..n {
                            let gij = g[i * n + j];
                            // dA = dC . B^T, dB = A^T . dC
                            ga[i * k + p] += gij * b[p * n + j];
                            gb[p * n + j] += a[i * k + p] * gij;
                        }
                    }
                }
                vec![ga, gb]
            }
            Op::Sum => vec![vec![g[0]; ctx.operands[0].data.len()]],
            Op::Mean => {
                let n = ctx.operands[0].data.len();
                vec![vec![g[0] / n as f64; n]]
            }
            Op::Stack => g.iter().map(|&gi| vec![gi]).collect(),
            Op::Index { flat } => {
                let mut ga = vec![0.0; ctx.operands[0].data.len()];
                ga[*flat] = g[0];
                vec![ga]
            }
        };
        Ok(grads)
    }
}

/// Applies `rule(x, y, g)` per element of a single-operand op.
fn unary_grads(ctx: &BackwardContext, rule: impl Fn(f64, f64, f64) -> f64) -> Vec<f64> {
    ctx.operands[0]
        .data
        .iter()
        .zip(ctx.output)
        .zip(ctx.grad_output)
        .map(|((&x, &y), &g)| rule(x, y, g))
        .collect()
}

/// Applies `rule(a, b, g) -> (da, db)` per output element and sums the
/// results back into each operand through its broadcast map.
fn binary_grads(ctx: &BackwardContext, rule: impl Fn(f64, f64, f64) -> (f64, f64)) -> Vec<Vec<f64>> {
    let (lhs, rhs) = (&ctx.operands[0], &ctx.operands[1]);
    let map_a = broadcast_offsets(&lhs.shape, ctx.output_shape);
    let map_b = broadcast_offsets(&rhs.shape, ctx.output_shape);
    let mut ga = vec![0.0; lhs.data.len()];
    let mut gb = vec![0.0; rhs.data.len()];
    for (i, &g) in ctx.grad_output.iter().enumerate() {
        let (ia, ib) = (map_a[i], map_b[i]);
        let (da, db) = rule(lhs.data[ia], rhs.data[ib], g);
        ga[ia] += da;
        gb[ib] += db;
    }
    vec![ga, gb]
}

pub(crate) fn gelu(x: f64) -> f64 {
    let u = SQRT_2_OVER_PI * (x + GELU_COEFF * x.powi(3));
    0.5 * x * (1.0 + u.tanh())
}

pub(crate) fn gelu_derivative(x: f64) -> f64 {
    let u = SQRT_2_OVER_PI * (x + GELU_COEFF * x.powi(3));
    let t = u.tanh();
    let du = SQRT_2_OVER_PI * (1.0 + 3.0 * GELU_COEFF * x * x);
    0.5 * (1.0 + t) + 0.5 * x * (1.0 - t * t) * du
}

/// Length of the softmax axis for a given shape; a 0-d tensor is one row of one.
pub(crate) fn softmax_row_len(shape: &[usize]) -> usize {
    shape.last().copied().unwrap_or(1)
}

/// Contracts each row's full Jacobian `J_ij = s_i (δ_ij - s_j)` with the
/// upstream gradient.
fn softmax_grad(s: &[f64], shape: &[usize], g: &[f64]) -> Vec<f64> {
    let row_len = softmax_row_len(shape);
    let mut out = vec![0.0; s.len()];
    if row_len == 0 {
        return out;
    }
    for start in (0..s.len()).step_by(row_len) {
        let row = &s[start..start + row_len];
        let g_row = &g[start..start + row_len];
        for i in 0..row_len {
            let mut acc = 0.0;
            for j in 0..row_len {
                let delta = if i == j { 1.0 } else { 0.0 };
                acc += row[i] * (delta - row[j]) * g_row[j];
            }
            out[start + i] = acc;
        }
    }
    out
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
