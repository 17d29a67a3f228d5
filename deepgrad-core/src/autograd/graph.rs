use crate::error::DeepGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use super::backward_op::{BackwardContext, OperandView};

/// Node identity: the address of the shared node.
pub(crate) type NodeId = *const RwLock<TensorData>;

/// Orders every node reachable from `root` so that operands come before the
/// nodes built from them. `root` is last.
///
/// Iterative depth-first traversal with a visited set keyed on node identity,
/// so each node appears once no matter how many paths reach it and deep
/// graphs do not grow the call stack.
pub fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let operands = node.read_data().operands.clone();
        stack.push((node, true));
        for operand in operands.iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push((operand.clone(), false));
            }
        }
    }
    sorted
}

/// Reverse-mode pass from `root` seeded with `seed`.
///
/// Gradients for this pass are gathered in a local map. A node is processed
/// only after every node built from it, so its pass gradient is complete when
/// it is added into the stored `grad` and handed to the node's local rule.
pub(crate) fn run_backward(root: &Tensor, seed: Vec<f64>) -> Result<(), DeepGradError> {
    let order = topological_sort(root);
    log::debug!("backward: {} nodes reachable from root", order.len());

    let mut pass_grads: HashMap<NodeId, Vec<f64>> = HashMap::new();
    pass_grads.insert(root.id(), seed);

    for node in order.iter().rev() {
        let Some(upstream) = pass_grads.remove(&node.id()) else {
            continue;
        };

        let (op, operands, out_data, out_shape) = {
            let mut guard = node.write_data();
            if upstream.len() != guard.grad.len() {
                return Err(DeepGradError::InternalError(format!(
                    "gradient of length {} for node with {} elements",
                    upstream.len(),
                    guard.grad.len()
                )));
            }
            for (stored, g) in guard.grad.iter_mut().zip(&upstream) {
                *stored += g;
            }
            if guard.is_leaf() {
                continue;
            }
            (
                guard.op.clone(),
                guard.operands.clone(),
                guard.data.clone(),
                guard.shape.clone(),
            )
        };
        log::trace!("backward: {:?} with {} operands", op, operands.len());

        let views: Vec<OperandView> = operands
            .iter()
            .map(|t| {
                let guard = t.read_data();
                OperandView {
                    data: guard.data.clone(),
                    shape: guard.shape.clone(),
                }
            })
            .collect();
        let ctx = BackwardContext {
            grad_output: &upstream,
            output: &out_data,
            output_shape: &out_shape,
            operands: &views,
        };
        let contributions = op.backward(&ctx)?;

        for (operand, contribution) in operands.iter().zip(contributions) {
            match pass_grads.get_mut(&operand.id()) {
                Some(acc) => {
                    for (a, c) in acc.iter_mut().zip(&contribution) {
                        *a += c;
                    }
                }
                None => {
                    pass_grads.insert(operand.id(), contribution);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
