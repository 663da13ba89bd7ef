use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold handles to the parameters they update and rewrite their values in place.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently held by the
    /// parameters.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call this before each backward pass, since backward accumulates into leaves.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);
}
