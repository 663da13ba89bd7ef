// src/nn/mod.rs
// Neurons, layers, the MLP container, losses and parameter initialization.

pub mod init;
pub mod layers;
pub mod losses;
pub mod model;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use layers::{Layer, Neuron};
pub use losses::{Reduction, SquaredErrorLoss};
pub use model::Mlp;
pub use module::Module;
pub use parameter::Parameter;
