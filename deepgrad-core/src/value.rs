//! Scalar handle over a 0-d [`Tensor`] node.

use crate::autograd::Op;
use crate::error::DeepGradError;
use crate::ops::broadcast_binary;
use crate::tensor::Tensor;
use std::fmt;

/// A differentiable scalar.
///
/// `Value` wraps a single-element tensor node, so scalars and tensors share
/// one graph and one backward algorithm. Arithmetic operators accept `Value`,
/// `&Value` and `f64` on either side; `f64` operands enter the graph as
/// constant leaves.
#[derive(Clone)]
pub struct Value(Tensor);

impl Value {
    /// Creates a leaf holding `data` with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value(Tensor::scalar(data))
    }

    /// Wraps a node known to hold exactly one element.
    pub(crate) fn from_scalar_tensor(tensor: Tensor) -> Self {
        debug_assert_eq!(tensor.numel(), 1);
        Value(tensor)
    }

    /// Converts a one-element tensor, rejecting anything larger.
    pub fn from_tensor(tensor: Tensor) -> Result<Self, DeepGradError> {
        if tensor.numel() != 1 {
            return Err(DeepGradError::ShapeMismatch {
                expected: vec![],
                actual: tensor.shape(),
                operation: "Value::from_tensor".to_string(),
            });
        }
        Ok(Value(tensor))
    }

    pub fn data(&self) -> f64 {
        self.0.read_data().data[0]
    }

    pub fn grad(&self) -> f64 {
        self.0.read_data().grad[0]
    }

    /// Overwrites the node's data without recording an operation.
    pub fn set_data(&self, data: f64) {
        self.0.write_data().data[0] = data;
    }

    pub fn zero_grad(&self) {
        self.0.zero_grad();
    }

    /// Seeds this value's gradient with 1 and propagates to every ancestor.
    pub fn backward(&self) -> Result<(), DeepGradError> {
        self.0.backward(None)
    }

    /// The underlying node.
    pub fn as_tensor(&self) -> &Tensor {
        &self.0
    }

    pub fn into_tensor(self) -> Tensor {
        self.0
    }

    pub fn is_leaf(&self) -> bool {
        self.0.is_leaf()
    }

    /// Real power; see [`Tensor::pow`] for the domain rules.
    pub fn pow(&self, exponent: f64) -> Result<Value, DeepGradError> {
        self.0.pow(exponent).map(Value)
    }

    pub fn powi(&self, exponent: i32) -> Value {
        Value(self.0.powi(exponent))
    }

    pub fn exp(&self) -> Value {
        Value(self.0.exp())
    }

    pub fn ln(&self) -> Value {
        Value(self.0.ln())
    }

    pub fn relu(&self) -> Value {
        Value(self.0.relu())
    }

    pub fn leaky_relu(&self, alpha: f64) -> Value {
        Value(self.0.leaky_relu(alpha))
    }

    pub fn gelu(&self) -> Value {
        Value(self.0.gelu())
    }

    pub fn sigmoid(&self) -> Value {
        Value(self.0.sigmoid())
    }

    pub fn tanh(&self) -> Value {
        Value(self.0.tanh())
    }

    fn binary(&self, rhs: &Value, op: Op, kernel: impl Fn(f64, f64) -> f64) -> Value {
        Value(broadcast_binary(&self.0, &rhs.0, Vec::new(), op, kernel))
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

macro_rules! impl_value_binary_op {
    ($trait:ident, $method:ident, $op:expr, $kernel:expr) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                self.binary(rhs, $op, $kernel)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                self.binary(&rhs, $op, $kernel)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                self.binary(rhs, $op, $kernel)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                self.binary(&rhs, $op, $kernel)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                self.binary(&Value::new(rhs), $op, $kernel)
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                self.binary(&Value::new(rhs), $op, $kernel)
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                Value::new(self).binary(rhs, $op, $kernel)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                Value::new(self).binary(&rhs, $op, $kernel)
            }
        }
    };
}

impl_value_binary_op!(Add, add, Op::Add, |x: f64, y: f64| x + y);
impl_value_binary_op!(Sub, sub, Op::Sub, |x: f64, y: f64| x - y);
impl_value_binary_op!(Mul, mul, Op::Mul, |x: f64, y: f64| x * y);
impl_value_binary_op!(Div, div, Op::Div, |x: f64, y: f64| x / y);

impl std::ops::Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        Value(self.0.neg())
    }
}

impl std::ops::Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        -&self
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.0.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data[0])
            .field("grad", &guard.grad[0])
            .field("op", &guard.op)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
