use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::scalar::Scalar;

/// The base trait for all trainable units (neurons, layers, the MLP).
///
/// A module maps an ordered slice of input nodes to an ordered vector of output nodes,
/// building a fresh graph on every call, and exposes the parameters it owns.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The input nodes, one per input feature.
    ///
    /// # Returns
    /// The output nodes, or `ScalarGradError::ArityMismatch` if `inputs` has the wrong
    /// length.
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError>;

    /// Returns every learnable parameter of the module, including those of sub-modules.
    ///
    /// The order is deterministic: outer to inner, neuron-major, each neuron's weights
    /// in input order followed by its bias.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns the parameters along with hierarchical names (e.g. `"layer1.neuron0.bias"`),
    /// in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Number of inputs the module expects.
    fn in_features(&self) -> usize;

    /// Number of outputs the module produces.
    fn out_features(&self) -> usize;

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Runs [`Module::forward`] on plain numbers, wrapping each as a leaf.
    fn forward_values(&self, inputs: &[f64]) -> Result<Vec<Scalar>, ScalarGradError> {
        let leaves: Vec<Scalar> = inputs.iter().map(|&x| Scalar::new(x)).collect();
        self.forward(&leaves)
    }
}

/// Fails with `ArityMismatch` unless `actual == expected`.
pub(crate) fn check_arity(
    expected: usize,
    actual: usize,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if expected != actual {
        return Err(ScalarGradError::ArityMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}
