//! # Training a small MLP on four examples
//!
//! Builds an `Mlp(3, [4, 4, 1])`, trains it with plain gradient descent on the
//! four-example toy dataset and prints `"<iteration> <loss>"` once per iteration,
//! followed by the final predictions.
//!
//! ## Configuration
//! Defaults are 20 iterations at learning rate 0.1. Override them with
//! `SCALARGRAD_ITERATIONS`, `SCALARGRAD_LR` and `SCALARGRAD_SEED`.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use scalargrad_core::data::{toy_dataset, Dataset};
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::train::{TrainConfig, Trainer};
use scalargrad_core::ScalarGradError;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let config = TrainConfig::default().with_env_overrides()?;
    let mlp = Mlp::new_with_rng(3, &[4, 4, 1], &mut config.rng())?;
    println!(
        "MLP {:?} with {} parameters",
        mlp.layer_sizes(),
        mlp.parameters().len()
    );

    let dataset = toy_dataset();
    let mut trainer = Trainer::new(&mlp, config)?;
    let history = trainer.fit(&dataset, |k, loss| println!("{} {}", k, loss))?;

    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("\nloss {:.6} -> {:.6}", first, last);
    }
    for sample in dataset.samples()? {
        let pred = mlp.forward_values(&sample.inputs)?;
        let value = pred.first().map_or(f64::NAN, |p| p.value());
        println!("target {:>5.1}  prediction {:>8.4}", sample.target, value);
    }
    Ok(())
}
