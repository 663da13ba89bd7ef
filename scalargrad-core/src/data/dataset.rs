use crate::error::ScalarGradError;

/// One training example: an input vector and its scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

/// Represents a dataset that can be accessed by index.
pub trait Dataset {
    /// Returns the sample at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Sample, ScalarGradError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Number of features in every input vector.
    fn num_features(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects every sample, in index order.
    fn samples(&self) -> Result<Vec<Sample>, ScalarGradError> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}
