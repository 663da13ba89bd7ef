use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x): {loss_base:?}, f(x+h): {loss_plus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_base: f64,
        loss_plus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Step size must be positive and finite, got {0}")]
    InvalidStep(f64),
}

/// Checks analytical gradients against forward finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs`. The analytical
/// gradient of each leaf (from a single backward pass) is compared with
/// `(f(x + epsilon) - f(x)) / epsilon`, where only that input is perturbed.
///
/// A pair passes when it is within `tolerance` either absolutely or relative to the
/// larger magnitude.
///
/// # Errors
/// Returns the first `GradCheckError` encountered, in input order.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidStep(epsilon));
    }

    // --- 1. Analytical pass ---
    let leaves: Vec<Scalar> = inputs.iter().map(|&x| Scalar::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let loss_base = output.value();

    // --- 2. Numerical pass, one input at a time ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let perturbed: Vec<Scalar> = inputs
            .iter()
            .enumerate()
            .map(|(j, &x)| Scalar::new(if j == i { x + epsilon } else { x }))
            .collect();
        let loss_plus = func(&perturbed)
            .map_err(GradCheckError::ForwardPassError)?
            .value();

        let numerical_grad = (loss_plus - loss_base) / epsilon;
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_base,
                loss_plus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
