pub mod sse;

pub use sse::{Reduction, SquaredErrorLoss};
