//! Stochastic Gradient Descent (SGD) optimizer implementation
//!
//! Vanilla gradient descent: `parameter = parameter - learning_rate * gradient`

use crate::optimizers::Optimizer;

/// Stochastic Gradient Descent optimizer.
///
/// Implements the basic update rule without momentum or adaptive scaling:
///
/// `w = w - η * ∇L/∂w`
///
/// where η (eta) is the learning rate.
///
/// # Example
///
/// ```
/// use backprop_mlp::optimizers::{Optimizer, SGD};
///
/// let mut optimizer = SGD::new(0.1);
/// let mut params = vec![1.0, 2.0, 3.0];
/// optimizer.update(&mut params, &[0.1, 0.2, 0.3]);
/// assert!((params[0] - 0.99).abs() < 1e-12);
/// assert!((params[2] - 2.97).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SGD {
    learning_rate: f64,
}

impl SGD {
    /// Creates a new SGD optimizer with the specified learning rate.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for SGD {
    /// Applies `parameter[i] -= learning_rate * gradient[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `parameters` and `gradients` have different lengths.
    fn update(&mut self, parameters: &mut [f64], gradients: &[f64]) {
        assert_eq!(
            parameters.len(),
            gradients.len(),
            "Parameters and gradients must have the same length"
        );

        for (param, grad) in parameters.iter_mut().zip(gradients.iter()) {
            *param -= self.learning_rate * grad;
        }
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}
