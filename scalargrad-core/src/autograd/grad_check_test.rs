use super::*;

const H: f64 = 1e-6;
const TOL: f64 = 1e-4;

#[test]
fn test_check_grad_polynomial() -> Result<(), GradCheckError> {
    // f(x) = 3x^2 - 4x + 5
    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> {
        let sq = x[0].pow(2.0)?;
        Ok(&(&(3.0 * &sq) - &(4.0 * &x[0])) + 5.0)
    };
    check_grad(f, &[2.0 / 3.0], H, TOL)?;
    check_grad(f, &[-1.5], H, TOL)
}

#[test]
fn test_check_grad_multi_input() -> Result<(), GradCheckError> {
    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> {
        let prod = &x[0] * &x[1];
        let ratio = &x[2] / &x[1];
        Ok((&prod + &ratio).tanh())
    };
    check_grad(f, &[0.3, -1.2, 0.7], H, TOL)
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    // The expression's value depends on x, but the leaf never enters the graph, so its
    // analytical gradient stays 0.
    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> {
        Ok(Scalar::new(x[0].value() * 2.0))
    };
    match check_grad(f, &[1.0], H, TOL) {
        Err(GradCheckError::GradientMismatch { input_index, .. }) => assert_eq!(input_index, 0),
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_propagates_forward_errors() {
    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> { x[0].pow(&x[0]) };
    assert!(matches!(
        check_grad(f, &[1.0], H, TOL),
        Err(GradCheckError::ForwardPassError(ScalarGradError::UnsupportedOperand { .. }))
    ));
}

#[test]
fn test_check_grad_rejects_bad_step() {
    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> { Ok(x[0].clone()) };
    assert_eq!(check_grad(f, &[1.0], 0.0, TOL), Err(GradCheckError::InvalidStep(0.0)));
}
