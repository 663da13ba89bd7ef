use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;

impl Scalar {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds `self.grad = 1.0` and walks every reachable node in reverse topological order
    /// (this node first, leaves last), applying each node's backward rule. Because a node
    /// is only reached after every consumer of it has run, its gradient is fully summed
    /// before it is pushed further down.
    ///
    /// Gradients are *accumulated* into leaves: calling `backward` twice without zeroing
    /// adds the second pass on top of the first, so every leaf ends up with twice its
    /// single-pass gradient. Zeroing leaves is the caller's job (see
    /// [`crate::nn::Module::zero_grad`]). Interior nodes only hold the contributions of
    /// the current pass: they are reset when the pass starts, before anything propagates.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InternalError` if a node's operands do not match its
    /// operation, which cannot happen for graphs built through [`crate::ops`].
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.is_leaf() {
            log::warn!("backward() called on a leaf node; only its own gradient is seeded");
        }

        let sorted_nodes = topological_sort(self);
        for node in sorted_nodes.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        for node in sorted_nodes.iter().rev() {
            if let Some(op) = node.op() {
                op.backward(node)?;
            }
        }
        log::trace!("backward: propagated through {} nodes", sorted_nodes.len());
        Ok(())
    }
}
