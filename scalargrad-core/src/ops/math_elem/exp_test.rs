use super::*;
use approx::assert_relative_eq;
use std::f64::consts::E;

#[test]
fn test_exp_forward() {
    let a = Scalar::new(1.0);
    let b = exp_op(&a);
    assert_relative_eq!(b.value(), E, epsilon = 1e-12);
    assert_eq!(b.op(), Some(OpTag::Exp));
}

#[test]
fn test_exp_backward() {
    let a = Scalar::new(1.0);
    let b = a.exp();
    b.backward().unwrap();
    assert_relative_eq!(a.grad(), E, epsilon = 1e-12);
}

#[test]
fn test_exp_chain() {
    // d/dx exp(2x) = 2 exp(2x)
    let x = Scalar::new(0.3);
    let y = (2.0 * &x).exp();
    y.backward().unwrap();
    assert_relative_eq!(x.grad(), 2.0 * (0.6_f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_tanh_built_from_exp_matches_tanh() {
    // The expanded form (e^{2n} - 1) / (e^{2n} + 1) must agree with the tanh node.
    let n = Scalar::new(0.8813735870195432);
    let e = (2.0 * &n).exp();
    let o = &(&e - 1.0) / &(&e + 1.0);
    o.backward().unwrap();

    let n2 = Scalar::new(0.8813735870195432);
    let o2 = n2.tanh();
    o2.backward().unwrap();

    assert_relative_eq!(o.value(), o2.value(), epsilon = 1e-10);
    assert_relative_eq!(n.grad(), n2.grad(), epsilon = 1e-10);
}
