//! Layer trait definition for neural network layers
//!
//! The trait covers the linear part of a layer. Activations are applied by the
//! forward engine, and the backward engine multiplies in their derivatives.

use crate::error::Result;
use crate::optimizers::Optimizer;
use crate::utils::Matrix;

/// Core trait for trainable layers.
pub trait Layer {
    /// Pre-activation `z = W · input` for one sample.
    ///
    /// Fails with a dimension mismatch if `input.len() != self.input_size()`.
    fn forward(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Weight gradient `delta ⊗ input` for the layer whose output error is `delta`.
    ///
    /// The result has the same shape as the weight matrix.
    fn weight_gradient(&self, input: &[f64], delta: &[f64]) -> Result<Matrix>;

    /// Error carried back to the layer input, `Wᵀ · delta`, before the
    /// previous layer's activation derivative is applied.
    fn backpropagate(&self, delta: &[f64]) -> Result<Vec<f64>>;

    /// Apply `gradient` to the weights through `optimizer`.
    ///
    /// A gradient whose shape differs from the weights is rejected and the
    /// weights are left unchanged.
    fn update_parameters(&mut self, gradient: &Matrix, optimizer: &mut dyn Optimizer)
        -> Result<()>;

    /// Number of input features per sample.
    fn input_size(&self) -> usize;

    /// Number of output features per sample.
    fn output_size(&self) -> usize;

    /// Number of trainable parameters.
    fn parameter_count(&self) -> usize;
}
