use crate::autograd::OpTag;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Multiplies two operands: `lhs * rhs`. Bare numbers are wrapped as new leaves.
pub fn mul_op(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Scalar {
    let lhs = lhs.into().into_scalar();
    let rhs = rhs.into().into_scalar();
    let value = lhs.value() * rhs.value();
    Scalar::from_op(value, OpTag::Mul, vec![lhs, rhs])
}

/// `d(a*b)/da = b`, `d(a*b)/db = a`
pub(crate) fn mul_backward(lhs: &Scalar, rhs: &Scalar, upstream: f64) {
    // Read both values before touching either gradient; for `a * a` they are the same node.
    let (lhs_value, rhs_value) = (lhs.value(), rhs.value());
    lhs.acc_grad(rhs_value * upstream);
    rhs.acc_grad(lhs_value * upstream);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
