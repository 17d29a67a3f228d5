use crate::tensor::Tensor;
use crate::value::Value;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

/// A trainable leaf tensor, optionally named.
///
/// Cloning a `Parameter` shares the underlying node, so the model, every
/// graph built from it and the optimizer all see the same data.
#[derive(Clone)]
pub struct Parameter {
    pub(crate) tensor: Tensor,
    pub name: Option<String>,
}

impl Parameter {
    pub fn new(tensor: Tensor, name: Option<String>) -> Self {
        Parameter { tensor, name }
    }

    /// A parameter backed by a scalar value's node.
    pub fn from_value(value: &Value, name: Option<String>) -> Self {
        Parameter::new(value.as_tensor().clone(), name)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }

    pub fn into_inner(self) -> Tensor {
        self.tensor
    }
}

impl Deref for Parameter {
    type Target = Tensor;

    fn deref(&self) -> &Self::Target {
        &self.tensor
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter(name={:?}, shape={:?})",
            self.name,
            self.tensor.shape()
        )
    }
}

/// Drops parameters whose node already appeared earlier in `params`.
///
/// A module reused at several places in a network lists the same nodes more
/// than once; the first occurrence keeps its position and name.
pub fn dedup_parameters(params: Vec<Parameter>) -> Vec<Parameter> {
    let mut seen = HashSet::with_capacity(params.len());
    params.into_iter().filter(|p| seen.insert(p.id())).collect()
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
