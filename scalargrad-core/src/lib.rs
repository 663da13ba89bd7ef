//! # scalargrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, with a small
//! neuron / layer / MLP stack built on top of it and trained by gradient descent.
//!
//! Every arithmetic operation on a [`Scalar`] records a new node in an implicit
//! computation graph. Calling [`Scalar::backward`] on an output walks that graph in
//! reverse topological order and accumulates exact gradients into every reachable node.

pub mod autograd;
pub mod data;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod scalar;
pub mod scalar_data;
pub mod train;

pub mod error;

// Re-export the node handle so it is reachable as `scalargrad_core::Scalar`
pub use scalar::Scalar;
pub use error::ScalarGradError;
pub use autograd::OpTag;
pub use ops::Operand;
// Re-export traits required by public impls (`Scalar: Zero + One`)
pub use num_traits;
