use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_arity, Module};
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use rand::Rng;

/// A row of independent [`Neuron`]s reading the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates a layer of `nout` neurons, each taking `nin` inputs.
    pub fn new(nin: usize, nout: usize) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(nin, nout, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nout == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new_with_rng(nin, rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Layer created: {} -> {}", nin, nout);
        Ok(Layer {
            neurons,
            in_features: nin,
        })
    }

    /// Builds a layer from existing neurons, which must share the same input count.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let first = neurons.first().ok_or_else(|| {
            ScalarGradError::InvalidConfiguration("a layer needs at least one neuron".to_string())
        })?;
        let in_features = first.in_features();
        for neuron in &neurons {
            check_arity(in_features, neuron.in_features(), "Layer::from_neurons")?;
        }
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        check_arity(self.in_features, inputs.len(), "Layer::forward")?;
        self.neurons
            .iter()
            .map(|n| n.forward_scalar(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", j, name), p))
            })
            .collect()
    }

    fn in_features(&self) -> usize {
        self.in_features
    }

    fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
