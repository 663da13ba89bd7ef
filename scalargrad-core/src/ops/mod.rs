//! # Scalar Operations Module (`ops`)
//!
//! The expression builder: every function here takes existing nodes (or plain numbers)
//! and returns a *new* [`Scalar`](crate::Scalar) that remembers its operands and the
//! [`OpTag`](crate::OpTag) whose rule will push gradient back into them.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each operation has a core function (`add_op`, `mul_op`, ...)
//!   that computes the forward value and records the node. The `std::ops` operators and
//!   the methods on `Scalar` are thin wrappers over them.
//! - **`_backward` functions:** the primitive operations also define the chain-rule
//!   contribution for their operands, dispatched from
//!   [`OpTag::backward`](crate::OpTag).
//! - **[`Operand`]:** the explicit conversion step that wraps a bare number into a leaf
//!   before any rule runs.
//!
//! No result is ever cached: building the same expression twice yields two distinct
//! graph nodes.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;
pub mod sum;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
pub use operand::Operand;
pub use sum::sum_op;
