use crate::data::dataset::{Dataset, Sample};
use crate::error::ScalarGradError;

/// A dataset backed by a vector of input rows and a vector of targets.
///
/// The i-th row of `inputs` corresponds to the i-th element of `targets`.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset {
    pub(crate) inputs: Vec<Vec<f64>>,
    pub(crate) targets: Vec<f64>,
}

impl VecDataset {
    /// Creates a new VecDataset from input rows and targets.
    ///
    /// # Errors
    /// `ArityMismatch` if the two vectors differ in length, or if the rows do not all
    /// have the same width.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self, ScalarGradError> {
        if inputs.len() != targets.len() {
            return Err(ScalarGradError::ArityMismatch {
                expected: inputs.len(),
                actual: targets.len(),
                operation: "VecDataset::new (targets)".to_string(),
            });
        }
        if let Some(first) = inputs.first() {
            let width = first.len();
            if let Some(row) = inputs.iter().find(|row| row.len() != width) {
                return Err(ScalarGradError::ArityMismatch {
                    expected: width,
                    actual: row.len(),
                    operation: "VecDataset::new (row width)".to_string(),
                });
            }
        }
        Ok(VecDataset { inputs, targets })
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

impl Dataset for VecDataset {
    fn get(&self, index: usize) -> Result<Sample, ScalarGradError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(inputs), Some(&target)) => Ok(Sample {
                inputs: inputs.clone(),
                target,
            }),
            _ => Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.targets.len()
    }

    fn num_features(&self) -> usize {
        self.inputs.first().map_or(0, |row| row.len())
    }
}
