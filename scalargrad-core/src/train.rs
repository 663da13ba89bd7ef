//! The gradient-descent training loop.
//!
//! One iteration is: forward every sample, compute the squared-error loss, zero the
//! parameter gradients, backward from the loss, and step the optimizer.

use crate::data::Dataset;
use crate::error::ScalarGradError;
use crate::nn::losses::SquaredErrorLoss;
use crate::nn::module::{check_arity, Module};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::scalar::Scalar;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hyperparameters for [`Trainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rate: f64,
    /// Seed for parameter initialization; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 20,
            learning_rate: 0.1,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies `SCALARGRAD_ITERATIONS`, `SCALARGRAD_LR` and `SCALARGRAD_SEED` when set.
    pub fn with_env_overrides(self) -> Result<Self, ScalarGradError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by `lookup`, keyed like [`TrainConfig::with_env_overrides`].
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ScalarGradError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SCALARGRAD_ITERATIONS") {
            self.iterations = parse_override("SCALARGRAD_ITERATIONS", &raw)?;
        }
        if let Some(raw) = lookup("SCALARGRAD_LR") {
            self.learning_rate = parse_override("SCALARGRAD_LR", &raw)?;
        }
        if let Some(raw) = lookup("SCALARGRAD_SEED") {
            self.seed = Some(parse_override("SCALARGRAD_SEED", &raw)?);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !self.learning_rate.is_finite() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be finite, got {}",
                self.learning_rate
            )));
        }
        if self.learning_rate <= 0.0 {
            log::warn!(
                "Training with non-positive learning rate {}; loss will not decrease",
                self.learning_rate
            );
        }
        Ok(())
    }

    /// Random generator for parameter initialization, seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ScalarGradError> {
    raw.trim().parse().map_err(|_| {
        ScalarGradError::InvalidConfiguration(format!("cannot parse {}={:?}", key, raw))
    })
}

/// Drives repeated forward/backward/update cycles of a single-output model.
#[derive(Debug)]
pub struct Trainer<'m, M: Module> {
    model: &'m M,
    optimizer: SgdOptimizer,
    loss_fn: SquaredErrorLoss,
    config: TrainConfig,
}

impl<'m, M: Module> Trainer<'m, M> {
    /// Builds a trainer with plain SGD over every parameter of `model`.
    pub fn new(model: &'m M, config: TrainConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        check_arity(1, model.out_features(), "Trainer::new (model outputs)")?;
        let optimizer = SgdOptimizer::new(
            model.parameters().into_iter().cloned(),
            config.learning_rate,
            0.0,
            0.0,
        )?;
        Ok(Trainer {
            model,
            optimizer,
            loss_fn: SquaredErrorLoss::default(),
            config,
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Forward pass over the whole dataset, one prediction node per sample.
    pub fn predict<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<Vec<Scalar>, ScalarGradError> {
        let mut predictions = Vec::with_capacity(dataset.len());
        for sample in dataset.samples()? {
            let mut out = self.model.forward_values(&sample.inputs)?;
            check_arity(1, out.len(), "Trainer::predict (model outputs)")?;
            if let Some(pred) = out.pop() {
                predictions.push(pred);
            }
        }
        Ok(predictions)
    }

    /// Computes the loss node of the current parameters over `dataset`.
    pub fn loss<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<Scalar, ScalarGradError> {
        let predictions = self.predict(dataset)?;
        let targets: Vec<f64> = dataset.samples()?.into_iter().map(|s| s.target).collect();
        self.loss_fn.calculate(&predictions, &targets)
    }

    /// Runs one training iteration and returns the loss measured before the update.
    pub fn step<D: Dataset + ?Sized>(&mut self, dataset: &D) -> Result<f64, ScalarGradError> {
        let loss = self.loss(dataset)?;
        self.optimizer.zero_grad();
        loss.backward()?;
        self.optimizer.step()?;
        Ok(loss.value())
    }

    /// Runs `config.iterations` steps, calling `on_iteration(k, loss)` after each, and
    /// returns the loss history.
    pub fn fit<D, F>(&mut self, dataset: &D, mut on_iteration: F) -> Result<Vec<f64>, ScalarGradError>
    where
        D: Dataset + ?Sized,
        F: FnMut(usize, f64),
    {
        if dataset.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "cannot train on an empty dataset".to_string(),
            ));
        }
        check_arity(self.model.in_features(), dataset.num_features(), "Trainer::fit (features)")?;

        let mut history = Vec::with_capacity(self.config.iterations);
        for k in 0..self.config.iterations {
            let loss = self.step(dataset)?;
            log::info!("iteration {}: loss {}", k, loss);
            on_iteration(k, loss);
            history.push(loss);
        }
        Ok(history)
    }
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
