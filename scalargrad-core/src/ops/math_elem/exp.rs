use crate::autograd::OpTag;
use crate::scalar::Scalar;

/// Computes `e^a`.
pub fn exp_op(a: &Scalar) -> Scalar {
    let value = a.value().exp();
    Scalar::from_op(value, OpTag::Exp, vec![a.clone()])
}

/// `d(e^a)/da = e^a`, which is the node's own value.
pub(crate) fn exp_backward(a: &Scalar, out_value: f64, upstream: f64) {
    a.acc_grad(out_value * upstream);
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
