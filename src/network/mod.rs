//! Feed-forward network built from dense layers
//!
//! The engine is split by stage:
//!
//! - `params`: weight storage and initialization
//! - `forward`: one sample through every layer, returning a [`ForwardCache`]
//! - `backward`: gradients from a target and a matching cache
//! - `train`: the epoch loop, prediction and accuracy
//!
//! Caches are passed by value between `forward` and `backward`. Neither of
//! them mutates the network, so only [`NeuralNetwork::update`] and the fitting
//! methods need `&mut self`.
//!
//! # Example
//!
//! ```
//! use backprop_mlp::config::NetworkConfig;
//! use backprop_mlp::network::NeuralNetwork;
//!
//! let mut nn = NeuralNetwork::new(&NetworkConfig::new(vec![2, 3, 2])).unwrap();
//! let cache = nn.forward(&[1.0, 0.0]).unwrap();
//! let gradients = nn.backward(&[0.0, 1.0], &cache).unwrap();
//! nn.update(&gradients).unwrap();
//! assert!(nn.predict(&[1.0, 0.0]).unwrap() < 2);
//! ```

pub mod backward;
pub mod forward;
pub mod params;
pub mod train;

pub use backward::Gradients;
pub use forward::ForwardCache;
pub use params::ParameterStore;
pub use train::{EpochReport, History, LogProgress, ProgressSink};

use crate::config::{validate_config, validate_learning_rate, NetworkConfig};
use crate::error::Result;
use crate::optimizers::{Optimizer, SGD};
use crate::utils::SimpleRng;

/// Sigmoid hidden layers, softmax output, trained with online SGD.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    params: ParameterStore,
    optimizer: SGD,
    epochs: usize,
    random_state: Option<u64>,
}

impl NeuralNetwork {
    /// Validate `config` and initialize the weights from its seed.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        validate_config(config)?;

        let mut rng = SimpleRng::new(config.random_state);
        let params = ParameterStore::initialize(&config.layer_shapes, &mut rng)?;

        Ok(Self {
            params,
            optimizer: SGD::new(config.learning_rate),
            epochs: config.epochs,
            random_state: Some(config.random_state),
        })
    }

    /// Network around existing parameters.
    ///
    /// The learning rate is checked the same way as in [`NeuralNetwork::new`].
    pub fn from_parameters(
        params: ParameterStore,
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        validate_learning_rate(learning_rate)?;

        Ok(Self {
            params,
            optimizer: SGD::new(learning_rate),
            epochs,
            random_state: None,
        })
    }

    pub fn layer_shapes(&self) -> &[usize] {
        self.params.layer_shapes()
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    /// Seed the weights were drawn from, `None` when built from explicit parameters.
    pub fn random_state(&self) -> Option<u64> {
        self.random_state
    }

    pub fn forward(&self, x: &[f64]) -> Result<ForwardCache> {
        forward::forward(&self.params, x)
    }

    pub fn backward(&self, y: &[f64], cache: &ForwardCache) -> Result<Gradients> {
        backward::backward(&self.params, y, cache)
    }

    /// Plain gradient descent step: `W[i] -= learning_rate * gradients[i]`.
    pub fn update(&mut self, gradients: &Gradients) -> Result<()> {
        self.params.apply_gradients(gradients, &mut self.optimizer)
    }
}
