//! Optimizer abstractions for parameter updates
//!
//! Optimizers define how gradients are applied to weights. The network uses
//! plain gradient descent, `weight = weight - learning_rate * gradient`, with a
//! learning rate fixed at construction.
//!
//! # Example
//!
//! ```
//! use backprop_mlp::optimizers::{Optimizer, SGD};
//!
//! let mut optimizer = SGD::new(0.1);
//! let mut weights = vec![1.0, 2.0];
//! optimizer.update(&mut weights, &[0.5, -0.5]);
//! assert!((weights[0] - 0.95).abs() < 1e-12);
//! ```

pub mod sgd;

pub use sgd::SGD;

/// Core trait for optimizers.
///
/// Parameters and gradients are passed as flat slices, so a weight matrix is
/// updated through its row-major storage.
pub trait Optimizer {
    /// Update `parameters` in place from `gradients`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if parameters and gradients have different lengths.
    fn update(&mut self, parameters: &mut [f64], gradients: &[f64]);

    /// The step size applied to every gradient.
    fn learning_rate(&self) -> f64;
}
