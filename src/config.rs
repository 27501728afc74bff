//! Configuration structures for training
//!
//! This module describes a network and its training run, and loads that
//! description from JSON files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{NetworkError, Result};
use crate::network::params::validate_layer_shapes;

/// Network architecture and training hyperparameters.
///
/// Only `layer_shapes` is required; the other fields fall back to
/// `epochs = 50`, `learning_rate = 0.01` and `random_state = 1`.
///
/// # Example
///
/// ```json
/// {
///   "layer_shapes": [784, 128, 64, 10],
///   "epochs": 10,
///   "learning_rate": 0.001,
///   "random_state": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Neuron count per layer, input features first and output classes last
    pub layer_shapes: Vec<usize>,

    /// Number of passes over the training set
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Fixed SGD step size
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Seed for weight initialization
    #[serde(default = "default_random_state")]
    pub random_state: u64,
}

fn default_epochs() -> usize {
    50
}

fn default_learning_rate() -> f64 {
    0.01
}

fn default_random_state() -> u64 {
    1
}

impl NetworkConfig {
    /// Config for `layer_shapes` with default hyperparameters.
    pub fn new(layer_shapes: Vec<usize>) -> Self {
        Self {
            layer_shapes,
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            random_state: default_random_state(),
        }
    }
}

/// Loads a network configuration from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use backprop_mlp::config::load_config;
///
/// let cfg = load_config("config/mnist_mlp.json").unwrap();
/// assert_eq!(cfg.layer_shapes.first(), Some(&784));
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<NetworkConfig> {
    let contents = fs::read_to_string(path)?;
    let config: NetworkConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks layer shapes and learning rate.
pub fn validate_config(config: &NetworkConfig) -> Result<()> {
    validate_layer_shapes(&config.layer_shapes)?;
    validate_learning_rate(config.learning_rate)
}

/// The SGD step must be finite and non-negative.
pub fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate < 0.0 {
        return Err(NetworkError::InvalidConfig(format!(
            "learning_rate must be finite and non-negative, got {}",
            learning_rate
        )));
    }
    Ok(())
}
