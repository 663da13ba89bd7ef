//! # Activation Functions
//!
//! Non-linearities applied by neurons. Currently only `tanh`.

pub mod tanh;

// Re-export key functions
pub use tanh::tanh_op;
