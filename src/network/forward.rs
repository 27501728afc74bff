//! Forward engine: one sample through every layer.

use crate::error::{check_len, Result};
use crate::layers::Layer;
use crate::network::params::ParameterStore;
use crate::utils::{sigmoid, softmax};

/// Intermediate values of one forward pass, consumed by the backward pass.
///
/// `activations[0]` is the input sample and `activations[i + 1]` the output of
/// layer i. `pre_activations[i]` is `W[i] · activations[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    pre_activations: Vec<Vec<f64>>,
    activations: Vec<Vec<f64>>,
}

impl ForwardCache {
    /// Network output, the softmax of the last pre-activation.
    pub fn output(&self) -> &[f64] {
        self.activations.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// One entry per layer (Z).
    pub fn pre_activations(&self) -> &[Vec<f64>] {
        &self.pre_activations
    }

    /// One entry per layer plus the input (A).
    pub fn activations(&self) -> &[Vec<f64>] {
        &self.activations
    }

    /// Width of every cached activation, input first.
    pub fn widths(&self) -> Vec<usize> {
        self.activations.iter().map(Vec::len).collect()
    }
}

/// Propagate `x` through `params`.
///
/// Hidden layers use sigmoid, the last layer softmax. Fails if `x` does not
/// have `layer_shapes[0]` entries.
pub fn forward(params: &ParameterStore, x: &[f64]) -> Result<ForwardCache> {
    check_len(params.layer_shapes()[0], x.len(), "forward input")?;

    let num_layers = params.num_layers();
    let mut pre_activations = Vec::with_capacity(num_layers);
    let mut activations = Vec::with_capacity(num_layers + 1);
    activations.push(x.to_vec());

    for (i, layer) in params.layers().iter().enumerate() {
        let z = layer.forward(&activations[i])?;
        let a = if i + 1 < num_layers {
            sigmoid(&z)
        } else {
            softmax(&z)
        };
        pre_activations.push(z);
        activations.push(a);
    }

    Ok(ForwardCache {
        pre_activations,
        activations,
    })
}
