// scalargrad-core/src/optim/mod.rs

//! Optimizers that update [`Parameter`](crate::nn::Parameter) values from their gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
