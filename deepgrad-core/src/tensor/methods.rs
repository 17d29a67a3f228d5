use crate::error::DeepGradError;
use crate::ops::activation::{gelu_op, leaky_relu_op, relu_op, sigmoid_op, softmax_op, tanh_op};
use crate::ops::arithmetic::{
    add_op, add_scalar_op, div_op, mul_op, mul_scalar_op, neg_op, pow_op, powi_op, sub_op,
};
use crate::ops::indexing::{index_op, unbind_elements};
use crate::ops::linalg::matmul_op;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::ops::reduction::{mean_op, sum_op};
use crate::tensor::Tensor;
use crate::value::Value;

/// Method forms of the graph-building ops in [`crate::ops`].
impl Tensor {
    pub fn add(&self, other: &Tensor) -> Result<Tensor, DeepGradError> {
        add_op(self, other)
    }

    pub fn sub(&self, other: &Tensor) -> Result<Tensor, DeepGradError> {
        sub_op(self, other)
    }

    pub fn mul(&self, other: &Tensor) -> Result<Tensor, DeepGradError> {
        mul_op(self, other)
    }

    pub fn div(&self, other: &Tensor) -> Result<Tensor, DeepGradError> {
        div_op(self, other)
    }

    /// Divides every element by a scalar value, keeping the value in the graph.
    pub fn div_value(&self, divisor: &Value) -> Tensor {
        let shape = self.shape();
        crate::ops::broadcast_binary(
            self,
            divisor.as_tensor(),
            shape,
            crate::autograd::Op::Div,
            |x, y| x / y,
        )
    }

    pub fn add_scalar(&self, c: f64) -> Tensor {
        add_scalar_op(self, c)
    }

    pub fn mul_scalar(&self, c: f64) -> Tensor {
        mul_scalar_op(self, c)
    }

    pub fn neg(&self) -> Tensor {
        neg_op(self)
    }

    pub fn pow(&self, exponent: f64) -> Result<Tensor, DeepGradError> {
        pow_op(self, exponent)
    }

    pub fn powi(&self, exponent: i32) -> Tensor {
        powi_op(self, exponent)
    }

    pub fn exp(&self) -> Tensor {
        exp_op(self)
    }

    pub fn ln(&self) -> Tensor {
        ln_op(self)
    }

    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, DeepGradError> {
        matmul_op(self, other)
    }

    pub fn relu(&self) -> Tensor {
        relu_op(self)
    }

    pub fn leaky_relu(&self, alpha: f64) -> Tensor {
        leaky_relu_op(self, alpha)
    }

    pub fn gelu(&self) -> Tensor {
        gelu_op(self)
    }

    pub fn sigmoid(&self) -> Tensor {
        sigmoid_op(self)
    }

    pub fn tanh(&self) -> Tensor {
        tanh_op(self)
    }

    pub fn softmax(&self) -> Tensor {
        softmax_op(self)
    }

    pub fn sum(&self) -> Tensor {
        sum_op(self)
    }

    pub fn mean(&self) -> Tensor {
        mean_op(self)
    }

    /// One element as a [`Value`] connected to this tensor.
    pub fn at(&self, index: &[usize]) -> Result<Value, DeepGradError> {
        index_op(self, index).map(Value::from_scalar_tensor)
    }

    /// Every element as a connected [`Value`], row-major.
    pub fn to_values(&self) -> Vec<Value> {
        unbind_elements(self)
            .into_iter()
            .map(Value::from_scalar_tensor)
            .collect()
    }
}
