use crate::error::ScalarGradError;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::math_elem::exp::exp_backward;
use crate::scalar::Scalar;
use std::fmt;

/// Identifies the operation that produced a non-leaf node.
///
/// The tag doubles as the node's backward rule: [`OpTag::backward`] maps each variant to
/// the contribution it pushes into the node's operands. Derived operations (negation,
/// subtraction, division) are built from these primitives and carry no tag of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpTag {
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ** p` for a constant exponent `p`.
    Pow(f64),
    /// `exp(a)`
    Exp,
    /// `tanh(a)`
    Tanh,
}

impl OpTag {
    /// Number of operands a node carrying this tag must have.
    pub fn arity(&self) -> usize {
        match self {
            OpTag::Add | OpTag::Mul => 2,
            OpTag::Pow(_) | OpTag::Exp | OpTag::Tanh => 1,
        }
    }

    /// Distributes the finalized gradient of `output` into its operands.
    ///
    /// `output` must have been produced by this operation. Contributions are added with
    /// `+=`, so an operand that appears twice (e.g. `a * a`) receives both.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InternalError` if the node's operand count does not match
    /// the arity of the tag.
    pub(crate) fn backward(&self, output: &Scalar) -> Result<(), ScalarGradError> {
        // Copy out what the rules need so no borrow of `output` is held while operands
        // are mutated.
        let (out_value, upstream, operands) = {
            let data = output.read_data();
            (data.value, data.grad, data.operands.clone())
        };

        if operands.len() != self.arity() {
            return Err(ScalarGradError::InternalError(format!(
                "node tagged {} has {} operands, expected {}",
                self,
                operands.len(),
                self.arity()
            )));
        }

        match *self {
            OpTag::Add => add_backward(&operands[0], &operands[1], upstream),
            OpTag::Mul => mul_backward(&operands[0], &operands[1], upstream),
            OpTag::Pow(exponent) => pow_backward(&operands[0], exponent, upstream),
            OpTag::Exp => exp_backward(&operands[0], out_value, upstream),
            OpTag::Tanh => tanh_backward(&operands[0], out_value, upstream),
        }
        Ok(())
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpTag::Add => write!(f, "+"),
            OpTag::Mul => write!(f, "*"),
            OpTag::Pow(exponent) => write!(f, "**{}", exponent),
            OpTag::Exp => write!(f, "exp"),
            OpTag::Tanh => write!(f, "tanh"),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
