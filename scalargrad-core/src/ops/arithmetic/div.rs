use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::powf;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Divides `lhs` by `rhs` as `lhs * rhs ** -1`.
///
/// Follows IEEE semantics: dividing by a zero-valued node yields an infinite value (and
/// infinite or NaN gradients), it does not fail.
pub fn div_op(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Scalar {
    let rhs = rhs.into().into_scalar();
    mul_op(lhs, powf(&rhs, -1.0))
}
