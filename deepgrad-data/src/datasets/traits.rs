use deepgrad_core::DeepGradError;

/// Indexed access to training samples.
///
/// `Item` is whatever one sample is, typically an `(input, target)` pair.
pub trait Dataset {
    type Item;

    /// Returns the sample at `index`, or `IndexOutOfBounds` past the end.
    fn get(&self, index: usize) -> Result<Self::Item, DeepGradError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
