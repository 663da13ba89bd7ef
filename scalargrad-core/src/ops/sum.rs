use crate::ops::arithmetic::add_op;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Adds `terms` onto `start`, left to right: `((start + t0) + t1) + ...`.
///
/// Every addition is an ordinary graph node, so the result participates in backward like
/// any other expression. With no terms the result is `start` itself (a new leaf if `start`
/// was a number).
pub fn sum_op<I>(start: impl Into<Operand>, terms: I) -> Scalar
where
    I: IntoIterator<Item = Scalar>,
{
    terms
        .into_iter()
        .fold(start.into().into_scalar(), |acc, term| add_op(&acc, &term))
}
