use crate::error::ScalarGradError;
use crate::nn::losses::{Reduction, SquaredErrorLoss};
use crate::scalar::Scalar;
use approx::assert_relative_eq;

#[test]
fn test_sse_sum_forward_backward() -> Result<(), ScalarGradError> {
    let preds = vec![Scalar::new(0.5), Scalar::new(-0.25)];
    let loss = SquaredErrorLoss::default().calculate(&preds, &[1.0, -1.0])?;
    // 0.25 + 0.5625
    assert_relative_eq!(loss.value(), 0.8125, epsilon = 1e-12);
    loss.backward()?;
    assert_relative_eq!(preds[0].grad(), 2.0 * (0.5 - 1.0), epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 2.0 * (-0.25 + 1.0), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sse_mean() -> Result<(), ScalarGradError> {
    let preds = vec![Scalar::new(1.0), Scalar::new(3.0)];
    let loss = SquaredErrorLoss::new(Reduction::Mean).calculate(&preds, &[0.0, 0.0])?;
    assert_relative_eq!(loss.value(), 5.0, epsilon = 1e-12);
    loss.backward()?;
    assert_relative_eq!(preds[0].grad(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sse_perfect_prediction_is_zero() -> Result<(), ScalarGradError> {
    let preds = vec![Scalar::new(1.0), Scalar::new(-1.0)];
    let loss = SquaredErrorLoss::default().calculate(&preds, &[1.0, -1.0])?;
    assert_eq!(loss.value(), 0.0);
    Ok(())
}

#[test]
fn test_sse_length_mismatch() {
    let preds = vec![Scalar::new(1.0)];
    let err = SquaredErrorLoss::default()
        .calculate(&preds, &[1.0, 2.0])
        .unwrap_err();
    assert!(matches!(err, ScalarGradError::ArityMismatch { expected: 1, actual: 2, .. }));
}

#[test]
fn test_sse_empty_rejected() {
    assert!(SquaredErrorLoss::default().calculate(&[], &[]).is_err());
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("sum".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert_eq!("MEAN".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert!("max".parse::<Reduction>().is_err());
}
