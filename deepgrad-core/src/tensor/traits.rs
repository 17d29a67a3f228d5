use crate::tensor::Tensor;
use std::fmt;

impl Clone for Tensor {
    /// Shares the same node; data is never copied.
    fn clone(&self) -> Self {
        Tensor {
            data: self.data.clone(),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operands are left out so printing a node never walks the graph.
        let guard = self.read_data();
        f.debug_struct("Tensor")
            .field("shape", &guard.shape)
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Tensor(shape={:?}, data={:?})", guard.shape, guard.data)
    }
}
