use crate::ops::arithmetic::mul::mul_op;
use crate::scalar::Scalar;

/// Negates `a` as `a * (-1)`; the `-1` is a fresh constant leaf.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(a, -1.0)
}
