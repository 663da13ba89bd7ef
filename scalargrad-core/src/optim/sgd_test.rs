use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::sgd::SgdOptimizer;
use approx::assert_relative_eq;

fn param_with_grad(value: f64, grad: f64) -> Parameter {
    let param = Parameter::new_unnamed(value);
    param.scalar().acc_grad(grad);
    param
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let p0 = param_with_grad(1.0, 0.5);
    let p1 = param_with_grad(-2.0, -1.0);
    let mut optimizer = SgdOptimizer::new(vec![p0.clone(), p1.clone()], 0.1, 0.0, 0.0)?;
    optimizer.step()?;
    assert_relative_eq!(p0.value(), 0.95, epsilon = 1e-12);
    assert_relative_eq!(p1.value(), -1.9, epsilon = 1e-12);
    // Gradients are left alone by step.
    assert_eq!(p0.grad(), 0.5);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
    let p = param_with_grad(1.0, 3.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0, 0.0)?;
    optimizer.zero_grad();
    assert_eq!(p.grad(), 0.0);
    optimizer.step()?;
    assert_eq!(p.value(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarGradError> {
    let p = param_with_grad(0.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.9, 0.0)?;
    optimizer.step()?;
    // v = 1
    assert_relative_eq!(p.value(), -0.1, epsilon = 1e-12);
    optimizer.step()?;
    // v = 0.9 * 1 + 1 = 1.9
    assert_relative_eq!(p.value(), -0.29, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let p = param_with_grad(2.0, 0.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.5, 0.0, 0.1)?;
    optimizer.step()?;
    assert_relative_eq!(p.value(), 2.0 - 0.5 * 0.2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_learning_rate_accessors() -> Result<(), ScalarGradError> {
    let mut optimizer = SgdOptimizer::new(vec![Parameter::new_unnamed(0.0)], 0.1, 0.0, 0.0)?;
    assert_eq!(optimizer.learning_rate(), 0.1);
    optimizer.set_learning_rate(0.01);
    assert_eq!(optimizer.learning_rate(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_rejects_bad_configuration() {
    assert_eq!(
        SgdOptimizer::new(Vec::new(), 0.1, 0.0, 0.0).unwrap_err(),
        ScalarGradError::EmptyParameterList
    );
    let p = Parameter::new_unnamed(0.0);
    assert!(SgdOptimizer::new(vec![p.clone()], f64::NAN, 0.0, 0.0).is_err());
    assert!(SgdOptimizer::new(vec![p.clone()], 0.1, -0.5, 0.0).is_err());
    assert!(SgdOptimizer::new(vec![p], 0.1, 0.0, f64::INFINITY).is_err());
}

#[test]
fn test_sgd_shared_handles_update_model() -> Result<(), ScalarGradError> {
    let p = Parameter::new_unnamed(1.0);
    let x = crate::Scalar::new(3.0);
    let y = p.scalar() * &x;
    y.backward()?;
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0, 0.0)?;
    optimizer.step()?;
    assert_relative_eq!(p.value(), 1.0 - 0.1 * 3.0, epsilon = 1e-12);
    Ok(())
}
