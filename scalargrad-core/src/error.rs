use thiserror::Error;

/// Custom error type for the scalargrad engine and the layers built on it.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Unsupported operand for {operation}: {operand}")]
    UnsupportedOperand {
        operation: String,
        operand: String,
    },

    #[error("Arity mismatch in {operation}: expected {expected} inputs, got {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Optimizer was given an empty parameter list")]
    EmptyParameterList,

    #[error("Internal error: {0}")]
    InternalError(String),
}
