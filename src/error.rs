//! Error types for the network engine
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`NetworkError`]. Shape errors are raised at the matrix or vector operation
//! that detects them and are never recovered internally.

use thiserror::Error;

/// Errors produced while building, running or training a network.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: &'static str,
    },

    #[error("Shape mismatch in {operation}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: &'static str,
    },

    #[error("Invalid layer shapes {0:?}: need at least two entries, all positive")]
    InvalidLayerShapes(Vec<usize>),

    #[error("Forward cache does not match the network: expected widths {expected:?}, got {actual:?}")]
    CacheMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Dataset length mismatch: {inputs} inputs but {labels} labels")]
    DatasetMismatch { inputs: usize, labels: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with [`NetworkError::DimensionMismatch`] unless `actual == expected`.
pub(crate) fn check_len(expected: usize, actual: usize, operation: &'static str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch {
            expected,
            actual,
            operation,
        })
    }
}
