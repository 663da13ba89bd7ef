use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

/// Subtracts `rhs` from `lhs` as `lhs + (-rhs)`.
pub fn sub_op(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Scalar {
    let rhs = rhs.into().into_scalar();
    add_op(lhs, neg_op(&rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward_backward() {
        let a = Scalar::new(5.0);
        let b = Scalar::new(2.0);
        let c = sub_op(&a, &b);
        assert_eq!(c.value(), 3.0);
        c.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_sub_with_constants() {
        let a = Scalar::new(2.0);
        assert_eq!((&a - 1.0).value(), 1.0);
        assert_eq!((1.0 - &a).value(), -1.0);

        let c = 10.0 - &a;
        c.backward().unwrap();
        assert_eq!(a.grad(), -1.0);
    }

    #[test]
    fn test_sub_self_is_zero_with_cancelling_grads() {
        let a = Scalar::new(7.0);
        let c = &a - &a;
        assert_eq!(c.value(), 0.0);
        c.backward().unwrap();
        assert_eq!(a.grad(), 0.0);
    }
}
