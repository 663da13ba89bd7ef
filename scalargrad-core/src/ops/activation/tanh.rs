use crate::autograd::OpTag;
use crate::scalar::Scalar;

/// Applies the hyperbolic tangent, `(e^{2a} - 1) / (e^{2a} + 1)`.
///
/// The value comes from [`f64::tanh`], which equals that expression but stays finite for
/// large `|a|` where `e^{2a}` overflows.
pub fn tanh_op(a: &Scalar) -> Scalar {
    let value = a.value().tanh();
    Scalar::from_op(value, OpTag::Tanh, vec![a.clone()])
}

/// `d tanh(a)/da = 1 - tanh(a)^2`
pub(crate) fn tanh_backward(a: &Scalar, out_value: f64, upstream: f64) {
    a.acc_grad((1.0 - out_value * out_value) * upstream);
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
