use crate::autograd::OpTag;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Adds two operands: `lhs + rhs`.
///
/// Bare numbers on either side are wrapped as new leaves, so `add_op(1.0, &a)` is the
/// reflected form of `add_op(&a, 1.0)`.
pub fn add_op(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Scalar {
    let lhs = lhs.into().into_scalar();
    let rhs = rhs.into().into_scalar();
    let value = lhs.value() + rhs.value();
    Scalar::from_op(value, OpTag::Add, vec![lhs, rhs])
}

/// `d(a+b)/da = d(a+b)/db = 1`
pub(crate) fn add_backward(lhs: &Scalar, rhs: &Scalar, upstream: f64) {
    lhs.acc_grad(upstream);
    rhs.acc_grad(upstream);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
