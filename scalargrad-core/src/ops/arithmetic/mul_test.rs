use super::*;

#[test]
fn test_mul_forward() {
    let c = mul_op(2.0, 3.0);
    assert_eq!(c.value(), 6.0);
    assert_eq!(c.op(), Some(OpTag::Mul));
}

#[test]
fn test_mul_backward() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = &a * &b;
    c.backward().unwrap();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_via_self() {
    let a = Scalar::new(-4.0);
    let sq = &a * &a;
    assert_eq!(sq.value(), 16.0);
    sq.backward().unwrap();
    // d(a^2)/da = 2a
    assert_eq!(a.grad(), -8.0);
}

#[test]
fn test_mul_reflected_constant() {
    let a = Scalar::new(1.5);
    let b = 2.0 * &a;
    assert_eq!(b.value(), 3.0);
    b.backward().unwrap();
    assert_eq!(a.grad(), 2.0);
}
