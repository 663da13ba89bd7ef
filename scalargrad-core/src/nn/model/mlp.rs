use crate::error::ScalarGradError;
use crate::nn::layers::Layer;
use crate::nn::module::{check_arity, Module};
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use rand::Rng;

/// A multi-layer perceptron: [`Layer`]s applied in sequence.
///
/// `Mlp::new(3, &[4, 4, 1])` builds layers `3 -> 4`, `4 -> 4` and `4 -> 1`.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new(nin: usize, nouts: &[usize]) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(nin, nouts, &mut rand::thread_rng())
    }

    /// Same as [`Mlp::new`], drawing every initial parameter from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for &nout in nouts {
            layers.push(Layer::new_with_rng(fan_in, nout, rng)?);
            fan_in = nout;
        }
        let mlp = Mlp { layers };
        log::debug!(
            "MLP created: sizes {:?}, {} parameters",
            mlp.layer_sizes(),
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    /// Chains existing layers, checking that each layer's output count feeds the next.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            check_arity(pair[0].out_features(), pair[1].in_features(), "Mlp::from_layers")?;
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns `[nin, n1, ..., nk]`.
    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.in_features())
            .chain(self.layers.iter().map(|l| l.out_features()))
            .collect()
    }

    /// Runs the network and returns its only output.
    ///
    /// Fails with `ArityMismatch` if the last layer has more than one neuron.
    pub fn forward_scalar(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarGradError> {
        check_arity(1, self.out_features(), "Mlp::forward_scalar")?;
        let mut outputs = self.forward(inputs)?;
        outputs.pop().ok_or_else(|| {
            ScalarGradError::InternalError("MLP produced no output".to_string())
        })
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", k, name), p))
            })
            .collect()
    }

    fn in_features(&self) -> usize {
        // Non-empty by construction.
        self.layers.first().map_or(0, |l| l.in_features())
    }

    fn out_features(&self) -> usize {
        self.layers.last().map_or(0, |l| l.out_features())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
