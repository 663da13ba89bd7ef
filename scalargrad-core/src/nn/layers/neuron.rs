use crate::error::ScalarGradError;
use crate::nn::init::default_parameter;
use crate::nn::module::{check_arity, Module};
use crate::nn::parameter::Parameter;
use crate::ops::{sum_op, tanh_op};
use crate::scalar::Scalar;
use rand::Rng;

/// A single tanh unit: `tanh(Σ w_i * x_i + b)`.
///
/// The weights and the bias are created once and only ever mutated in place by an
/// optimizer.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, all parameters drawn from `U(-1, 1)`.
    pub fn new(nin: usize) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(nin, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`], drawing from the given generator.
    pub fn new_with_rng<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Result<Self, ScalarGradError> {
        let weights = (0..nin)
            .map(|i| default_parameter(format!("weight{}", i), rng))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = default_parameter("bias".to_string(), rng)?;
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn from_values(weights: &[f64], bias: f64) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Parameter::new(w, Some(format!("weight{}", i))))
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(bias, Some("bias".to_string())),
        }
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes `Σ w_i * x_i + b` without the activation.
    ///
    /// The sum starts from the bias and adds the products in input order.
    pub fn pre_activation(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarGradError> {
        check_arity(self.weights.len(), inputs.len(), "Neuron::forward")?;
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w.scalar() * x);
        Ok(sum_op(self.bias.scalar(), products))
    }

    /// Computes the neuron's output node.
    pub fn forward_scalar(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarGradError> {
        let act = self.pre_activation(inputs)?;
        Ok(tanh_op(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        Ok(vec![self.forward_scalar(inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut named: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight{}", i), w))
            .collect();
        named.push(("bias".to_string(), &self.bias));
        named
    }

    fn in_features(&self) -> usize {
        self.weights.len()
    }

    fn out_features(&self) -> usize {
        1
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
