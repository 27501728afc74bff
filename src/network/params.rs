//! Parameter store: the weight matrices of every layer.

use crate::error::{NetworkError, Result};
use crate::layers::{DenseLayer, Layer};
use crate::network::backward::Gradients;
use crate::optimizers::Optimizer;
use crate::utils::{Matrix, SimpleRng};

/// Owns one [`DenseLayer`] per consecutive pair of layer shapes.
///
/// Weights are only mutated through [`ParameterStore::apply_gradients`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    layer_shapes: Vec<usize>,
    layers: Vec<DenseLayer>,
}

impl ParameterStore {
    /// Build the weight matrices for `layer_shapes`, drawing from `rng`.
    ///
    /// Layer i gets shape `(layer_shapes[i + 1], layer_shapes[i])`. Layers are
    /// filled in order, so the same shapes and seed reproduce the same weights.
    pub fn initialize(layer_shapes: &[usize], rng: &mut SimpleRng) -> Result<Self> {
        validate_layer_shapes(layer_shapes)?;

        let layers: Vec<DenseLayer> = layer_shapes
            .windows(2)
            .map(|pair| DenseLayer::new(pair[0], pair[1], rng))
            .collect();

        let store = Self {
            layer_shapes: layer_shapes.to_vec(),
            layers,
        };
        log::debug!(
            "initialized {} layers for shapes {:?} ({} parameters)",
            store.num_layers(),
            store.layer_shapes,
            store.parameter_count()
        );
        Ok(store)
    }

    /// Build a store from explicit weight matrices.
    ///
    /// Matrix i must have shape `(layer_shapes[i + 1], layer_shapes[i])`.
    pub fn from_weights(layer_shapes: &[usize], weights: Vec<Matrix>) -> Result<Self> {
        validate_layer_shapes(layer_shapes)?;
        if weights.len() != layer_shapes.len() - 1 {
            return Err(NetworkError::DimensionMismatch {
                expected: layer_shapes.len() - 1,
                actual: weights.len(),
                operation: "ParameterStore::from_weights",
            });
        }
        for (pair, matrix) in layer_shapes.windows(2).zip(&weights) {
            matrix.check_shape((pair[1], pair[0]), "ParameterStore::from_weights")?;
        }

        Ok(Self {
            layer_shapes: layer_shapes.to_vec(),
            layers: weights.into_iter().map(DenseLayer::from_weights).collect(),
        })
    }

    pub fn layer_shapes(&self) -> &[usize] {
        &self.layer_shapes
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Number of weight matrices (L).
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Weight matrix of layer `index`.
    pub fn get(&self, index: usize) -> Option<&Matrix> {
        self.layers.get(index).map(DenseLayer::weights)
    }

    pub fn weights(&self) -> impl Iterator<Item = &Matrix> {
        self.layers.iter().map(DenseLayer::weights)
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }

    /// Apply `gradients` to every layer through `optimizer`.
    ///
    /// Every gradient is shape-checked before any weight changes, so a
    /// mismatched gradient list leaves the store untouched.
    pub fn apply_gradients(
        &mut self,
        gradients: &Gradients,
        optimizer: &mut dyn Optimizer,
    ) -> Result<()> {
        if gradients.len() != self.layers.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.layers.len(),
                actual: gradients.len(),
                operation: "ParameterStore::apply_gradients",
            });
        }
        for (layer, gradient) in self.layers.iter().zip(gradients.iter()) {
            gradient.check_shape(layer.weights().shape(), "ParameterStore::apply_gradients")?;
        }

        for (layer, gradient) in self.layers.iter_mut().zip(gradients.iter()) {
            layer.update_parameters(gradient, optimizer)?;
        }
        Ok(())
    }
}

/// At least an input and an output layer, and no empty layer.
pub fn validate_layer_shapes(layer_shapes: &[usize]) -> Result<()> {
    if layer_shapes.len() < 2 || layer_shapes.contains(&0) {
        return Err(NetworkError::InvalidLayerShapes(layer_shapes.to_vec()));
    }
    Ok(())
}
