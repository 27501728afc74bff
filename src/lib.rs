//! Feed-forward neural network trained with hand-written backpropagation
//!
//! Dense layers with sigmoid hidden activations and a softmax output, trained
//! one sample at a time with plain stochastic gradient descent. Gradients are
//! derived by hand; there is no autodiff engine.
//!
//! # Modules
//!
//! - `network`: parameter store, forward and backward engines, training loop
//! - `layers`: Layer trait and the dense layer
//! - `optimizers`: Optimizer trait and SGD
//! - `utils`: RNG, activation and cost functions, matrix type
//! - `config`: network and training configuration
//! - `error`: error type shared by every module

pub mod config;
pub mod error;
pub mod layers;
pub mod network;
pub mod optimizers;
pub mod utils;

pub use config::NetworkConfig;
pub use error::{NetworkError, Result};
pub use network::NeuralNetwork;
