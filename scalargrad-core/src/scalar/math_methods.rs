use crate::error::ScalarGradError;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::pow::powf;
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::exp_op;
use crate::ops::operand::Operand;
use crate::scalar::Scalar;

impl Scalar {
    /// Raises this node to a numeric power. See [`pow_op`].
    ///
    /// # Errors
    /// Returns `ScalarGradError::UnsupportedOperand` if `exponent` is a graph node.
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Scalar, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this node to a constant `f64` power.
    pub fn powf(&self, exponent: f64) -> Scalar {
        powf(self, exponent)
    }

    /// `e^self`
    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }

    /// `tanh(self)`
    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }
}
