//! Dense (fully connected) layer implementation
//!
//! A bias-free linear transformation: z = W · a

use crate::error::{check_len, Result};
use crate::layers::Layer;
use crate::optimizers::Optimizer;
use crate::utils::{Matrix, SimpleRng};

/// Dense layer holding one weight matrix of shape (output_size, input_size).
///
/// # Example
///
/// ```
/// use backprop_mlp::layers::{DenseLayer, Layer};
/// use backprop_mlp::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let layer = DenseLayer::new(784, 128, &mut rng);
/// assert_eq!(layer.input_size(), 784);
/// assert_eq!(layer.output_size(), 128);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix,
}

impl DenseLayer {
    /// Create a new DenseLayer with uniform weights in [-0.5, 0.5).
    ///
    /// Each entry is drawn from [0, 1) in row-major order, then shifted by -0.5.
    pub fn new(input_size: usize, output_size: usize, rng: &mut SimpleRng) -> Self {
        let weights = Matrix::from_fn(output_size, input_size, |_, _| rng.next_f64() - 0.5);
        Self { weights }
    }

    /// Wrap an existing weight matrix of shape (output_size, input_size).
    pub fn from_weights(weights: Matrix) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }
}

impl Layer for DenseLayer {
    fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.weights.dot(input)
    }

    fn weight_gradient(&self, input: &[f64], delta: &[f64]) -> Result<Matrix> {
        check_len(self.input_size(), input.len(), "DenseLayer::weight_gradient input")?;
        check_len(self.output_size(), delta.len(), "DenseLayer::weight_gradient delta")?;
        Ok(Matrix::outer(delta, input))
    }

    fn backpropagate(&self, delta: &[f64]) -> Result<Vec<f64>> {
        self.weights.transpose_dot(delta)
    }

    fn update_parameters(
        &mut self,
        gradient: &Matrix,
        optimizer: &mut dyn Optimizer,
    ) -> Result<()> {
        gradient.check_shape(self.weights.shape(), "DenseLayer::update_parameters")?;
        optimizer.update(self.weights.as_mut_slice(), gradient.as_slice());
        Ok(())
    }

    fn input_size(&self) -> usize {
        self.weights.cols()
    }

    fn output_size(&self) -> usize {
        self.weights.rows()
    }

    fn parameter_count(&self) -> usize {
        self.weights.as_slice().len()
    }
}
