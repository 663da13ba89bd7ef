use crate::scalar::Scalar;
use std::fmt;
use std::ops::Deref;

/// A learnable scalar owned by a [`Module`](crate::nn::Module): a neuron weight or bias.
///
/// A `Parameter` wraps a leaf [`Scalar`] that lives across training iterations. Every
/// forward pass reads it into a fresh graph, and between passes an optimizer rewrites its
/// value in place. Parameters are the only nodes whose value is ever mutated.
///
/// Cloning a `Parameter` yields another handle to the same node.
#[derive(Clone)]
pub struct Parameter {
    scalar: Scalar,
    name: Option<String>,
}

impl Parameter {
    /// Creates a new parameter holding `value`.
    pub fn new(value: f64, name: Option<String>) -> Self {
        let scalar = Scalar::new(value);
        if let Some(ref n) = name {
            scalar.set_label(n.clone());
        }
        Parameter { scalar, name }
    }

    pub fn new_unnamed(value: f64) -> Self {
        Parameter::new(value, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the underlying graph node.
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Overwrites the parameter's value.
    pub fn set_value(&self, value: f64) {
        self.scalar.set_value(value);
    }

    /// Adds `delta` to the parameter's value.
    pub fn update(&self, delta: f64) {
        let current = self.scalar.value();
        self.scalar.set_value(current + delta);
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Scalar {
        self.scalar
    }
}

// Allow reading the node (value, grad, arithmetic) directly through the Parameter.
impl Deref for Parameter {
    type Target = Scalar;

    fn deref(&self) -> &Self::Target {
        &self.scalar
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter({}, value={}, grad={})",
            self.name().unwrap_or("unnamed"),
            self.scalar.value(),
            self.scalar.grad()
        )
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
