use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// With `momentum == 0` and `weight_decay == 0` a step is plain descent:
/// `p.value += -lr * p.grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One velocity per parameter, allocated on the first step that needs it.
    momentum_buffers: Option<Vec<f64>>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize (handles; the nodes themselves are shared).
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor, `0.0` to disable.
    /// * `weight_decay`: L2 penalty factor, `0.0` to disable.
    ///
    /// # Errors
    ///
    /// `EmptyParameterList` if `params` yields nothing, `InvalidConfiguration` if a
    /// hyperparameter is not finite or `momentum`/`weight_decay` is negative.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        let params: Vec<Parameter> = params.into_iter().collect();
        if params.is_empty() {
            return Err(ScalarGradError::EmptyParameterList);
        }
        if !lr.is_finite() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be finite, got {}",
                lr
            )));
        }
        if !(momentum.is_finite() && momentum >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "momentum must be finite and non-negative, got {}",
                momentum
            )));
        }
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "weight decay must be finite and non-negative, got {}",
                weight_decay
            )));
        }
        if lr <= 0.0 {
            log::warn!("SgdOptimizer created with non-positive learning rate {}", lr);
        }
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers: None,
        })
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let n_params = self.params.len();
        let momentum = self.momentum;
        let mut buffers = if momentum != 0.0 {
            Some(self.momentum_buffers.get_or_insert_with(|| vec![0.0; n_params]))
        } else {
            None
        };

        for (i, param) in self.params.iter().enumerate() {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.value();
            }
            if let Some(bufs) = buffers.as_deref_mut() {
                bufs[i] = momentum * bufs[i] + d_p;
                d_p = bufs[i];
            }
            param.update(-self.lr * d_p);
        }
        log::debug!("SGD step over {} parameters (lr={})", n_params, self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
