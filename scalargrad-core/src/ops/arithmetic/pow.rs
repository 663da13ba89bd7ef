use crate::autograd::OpTag;
use crate::error::ScalarGradError;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Raises `base` to a constant power: `base ** exponent`.
///
/// The exponent must be a plain number. It is stored in the node's tag, not as an
/// operand, so no gradient flows into it.
///
/// # Errors
/// Returns `ScalarGradError::UnsupportedOperand` if `exponent` is a graph node.
pub fn pow_op(base: &Scalar, exponent: impl Into<Operand>) -> Result<Scalar, ScalarGradError> {
    let exponent = exponent.into();
    match exponent.as_constant() {
        Some(p) => Ok(powf(base, p)),
        None => Err(ScalarGradError::UnsupportedOperand {
            operation: "pow".to_string(),
            operand: format!("{} (only numeric exponents are supported)", exponent),
        }),
    }
}

/// Infallible form of [`pow_op`] for an exponent already known to be a number.
pub(crate) fn powf(base: &Scalar, exponent: f64) -> Scalar {
    let value = base.value().powf(exponent);
    Scalar::from_op(value, OpTag::Pow(exponent), vec![base.clone()])
}

/// `d(a^p)/da = p * a^(p-1)`
pub(crate) fn pow_backward(base: &Scalar, exponent: f64, upstream: f64) {
    let local = exponent * base.value().powf(exponent - 1.0);
    base.acc_grad(local * upstream);
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
