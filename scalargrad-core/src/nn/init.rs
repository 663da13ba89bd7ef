use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Range used for freshly created weights and biases.
pub const DEFAULT_INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// Fills the parameter with a value drawn uniformly from `[low, high)`.
///
/// Operates in-place on the parameter's node.
///
/// # Errors
/// Returns `ScalarGradError::InvalidConfiguration` unless `low < high` and both are finite.
pub fn uniform_<R: Rng + ?Sized>(
    param: &Parameter,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(ScalarGradError::InvalidConfiguration(format!(
            "uniform_ requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    param.set_value(dist.sample(rng));
    Ok(())
}

/// Creates a parameter initialized from [`DEFAULT_INIT_RANGE`].
pub(crate) fn default_parameter<R: Rng + ?Sized>(
    name: String,
    rng: &mut R,
) -> Result<Parameter, ScalarGradError> {
    let param = Parameter::new(0.0, Some(name));
    let (low, high) = DEFAULT_INIT_RANGE;
    uniform_(&param, low, high, rng)?;
    Ok(param)
}
