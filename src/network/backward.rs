//! Backward engine: weight gradients by reverse chain rule.
//!
//! The output delta is `mse_deriv(y, output) ⊙ softmax_deriv(Z[L-1])`. This
//! pairs the squared-error signal with the diagonal of the softmax Jacobian,
//! which is a simplification of the exact joint gradient.

use crate::error::{check_len, NetworkError, Result};
use crate::layers::Layer;
use crate::network::forward::ForwardCache;
use crate::network::params::ParameterStore;
use crate::utils::{hadamard, mse_deriv, sigmoid_deriv, softmax_deriv, Matrix};

/// One gradient matrix per layer, ordered like the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    weights: Vec<Matrix>,
}

impl Gradients {
    pub fn new(weights: Vec<Matrix>) -> Self {
        Self { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Matrix> {
        self.weights.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Matrix> {
        self.weights.iter()
    }

    /// Shape of every gradient matrix, in layer order.
    pub fn shapes(&self) -> Vec<(usize, usize)> {
        self.weights.iter().map(Matrix::shape).collect()
    }
}

/// Compute the weight gradients for target `y` from a matching forward `cache`.
///
/// A cache whose widths differ from the network's layer shapes is rejected
/// with [`NetworkError::CacheMismatch`].
pub fn backward(params: &ParameterStore, y: &[f64], cache: &ForwardCache) -> Result<Gradients> {
    check_cache(params, cache)?;

    let layers = params.layers();
    let z = cache.pre_activations();
    let a = cache.activations();
    let last = layers.len() - 1;

    check_len(layers[last].output_size(), y.len(), "backward target")?;

    let mut delta = hadamard(&mse_deriv(y, cache.output())?, &softmax_deriv(&z[last]))?;
    let mut gradients = vec![Matrix::zeros(0, 0); layers.len()];

    for i in (0..layers.len()).rev() {
        gradients[i] = layers[i].weight_gradient(&a[i], &delta)?;
        if i > 0 {
            let propagated = layers[i].backpropagate(&delta)?;
            delta = hadamard(&propagated, &sigmoid_deriv(&z[i - 1]))?;
        }
    }

    Ok(Gradients::new(gradients))
}

fn check_cache(params: &ParameterStore, cache: &ForwardCache) -> Result<()> {
    let expected = params.layer_shapes();
    let z_widths: Vec<usize> = cache.pre_activations().iter().map(Vec::len).collect();

    // Pre-activations must line up with every layer after the input.
    if cache.widths() != expected || z_widths != expected[1..] {
        return Err(NetworkError::CacheMismatch {
            expected: expected.to_vec(),
            actual: cache.widths(),
        });
    }
    Ok(())
}
