//! Shared utilities for the network engine
//!
//! This module provides random number generation, activation and cost
//! functions, and the matrix type the layers are stored in.

pub mod activations;
pub mod cost;
pub mod matrix;
pub mod rng;

pub use activations::{sigmoid, sigmoid_deriv, softmax, softmax_deriv};
pub use cost::{mse, mse_deriv};
pub use matrix::{argmax, hadamard, Matrix};
pub use rng::SimpleRng;
