use crate::scalar::Scalar;
use std::fmt;

/// One side of an operation: either an existing graph node or a bare number.
///
/// Binary operations accept anything convertible into an `Operand` and resolve it with
/// [`Operand::into_scalar`] before building their output, so every rule only ever sees
/// `Scalar`s. A wrapped constant is a fresh leaf with no operands; the gradient it receives
/// during backward is never read.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Scalar),
    Constant(f64),
}

impl Operand {
    /// Resolves this operand to a graph node, wrapping constants as new leaves.
    pub fn into_scalar(self) -> Scalar {
        match self {
            Operand::Node(scalar) => scalar,
            Operand::Constant(value) => Scalar::new(value),
        }
    }

    /// Returns the constant value, or `None` if this operand is a graph node.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Operand::Node(_) => None,
            Operand::Constant(value) => Some(*value),
        }
    }
}

impl From<Scalar> for Operand {
    fn from(scalar: Scalar) -> Self {
        Operand::Node(scalar)
    }
}

impl From<&Scalar> for Operand {
    fn from(scalar: &Scalar) -> Self {
        Operand::Node(scalar.clone())
    }
}

macro_rules! impl_operand_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Constant(f64::from(value))
                }
            }
        )*
    };
}

impl_operand_from_number!(f64, f32, i32, u32, i16, u16, i8, u8);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Node(scalar) => write!(f, "graph node {}", scalar),
            Operand::Constant(value) => write!(f, "constant {}", value),
        }
    }
}
