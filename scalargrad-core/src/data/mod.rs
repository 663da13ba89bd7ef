//! Training data: the [`Dataset`] trait, an in-memory [`VecDataset`], and the small
//! four-example set used by the demo and tests.

pub mod dataset;
pub mod toy;
pub mod vec_dataset;

pub use dataset::{Dataset, Sample};
pub use toy::toy_dataset;
pub use vec_dataset::VecDataset;
