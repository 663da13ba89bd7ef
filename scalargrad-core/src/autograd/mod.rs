//! Reverse-mode differentiation over the scalar graph.
//!
//! [`OpTag`] names the rule that produced each node and dispatches its local chain-rule
//! contribution. [`graph`] orders the nodes reachable from an output so that every node's
//! gradient is complete before it is propagated. [`grad_check`] verifies analytical
//! gradients against finite differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::OpTag;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, trace};
