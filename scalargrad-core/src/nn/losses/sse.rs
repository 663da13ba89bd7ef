use crate::error::ScalarGradError;
use crate::nn::module::check_arity;
use crate::ops::sum_op;
use crate::scalar::Scalar;
use std::str::FromStr;

/// How per-example squared errors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Invalid reduction: '{}'. Expected 'sum' or 'mean'.",
                s
            ))),
        }
    }
}

/// Squared-error loss `Σ (pred_i - target_i)^2`, optionally divided by the count.
///
/// The loss is an ordinary graph node, so `loss.backward()` fills in the gradient of every
/// parameter that contributed to the predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredErrorLoss {
    reduction: Reduction,
}

impl SquaredErrorLoss {
    pub fn new(reduction: Reduction) -> Self {
        SquaredErrorLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(
        &self,
        predictions: &[Scalar],
        targets: &[f64],
    ) -> Result<Scalar, ScalarGradError> {
        check_arity(predictions.len(), targets.len(), "SquaredErrorLoss::calculate")?;
        if predictions.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "squared-error loss over zero examples".to_string(),
            ));
        }
        let squared = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| (pred - target).powf(2.0));
        let total = sum_op(0.0, squared);
        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total / predictions.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
