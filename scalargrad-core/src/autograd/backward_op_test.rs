use super::*;

#[test]
fn test_op_tag_display() {
    assert_eq!(OpTag::Add.to_string(), "+");
    assert_eq!(OpTag::Mul.to_string(), "*");
    assert_eq!(OpTag::Pow(2.0).to_string(), "**2");
    assert_eq!(OpTag::Pow(-1.0).to_string(), "**-1");
    assert_eq!(OpTag::Exp.to_string(), "exp");
    assert_eq!(OpTag::Tanh.to_string(), "tanh");
}

#[test]
fn test_op_tag_arity() {
    assert_eq!(OpTag::Add.arity(), 2);
    assert_eq!(OpTag::Mul.arity(), 2);
    assert_eq!(OpTag::Pow(3.0).arity(), 1);
    assert_eq!(OpTag::Exp.arity(), 1);
    assert_eq!(OpTag::Tanh.arity(), 1);
}

#[test]
fn test_backward_rejects_malformed_node() {
    // A hand-built node whose operand count disagrees with its tag.
    let a = Scalar::new(1.0);
    let bad = Scalar::from_op(1.0, OpTag::Add, vec![a]);
    bad.set_grad(1.0);
    let result = OpTag::Add.backward(&bad);
    assert!(matches!(result, Err(ScalarGradError::InternalError(_))));
}

#[test]
fn test_backward_uses_output_grad_not_seed() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(5.0);
    let out = Scalar::from_op(10.0, OpTag::Mul, vec![a.clone(), b.clone()]);
    out.set_grad(0.5);
    OpTag::Mul.backward(&out).unwrap();
    assert_eq!(a.grad(), 2.5);
    assert_eq!(b.grad(), 1.0);
}
