//! Activation functions for neural networks
//!
//! Elementwise functions over pre-activation vectors:
//! - Sigmoid and its derivative (hidden layers)
//! - Softmax and the diagonal of its Jacobian (output layer)
//!
//! Derivatives take the pre-activation `z`, not the activated value.

/// Sigmoid of a single value: 1 / (1 + exp(-x)).
pub fn sigmoid_scalar(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid activation applied elementwise.
pub fn sigmoid(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&v| sigmoid_scalar(v)).collect()
}

/// Sigmoid derivative evaluated at the pre-activation: s(z) * (1 - s(z)).
pub fn sigmoid_deriv(z: &[f64]) -> Vec<f64> {
    z.iter()
        .map(|&v| {
            let s = sigmoid_scalar(v);
            s * (1.0 - s)
        })
        .collect()
}

/// Softmax over the whole vector.
///
/// Uses the max-subtraction trick for numerical stability to avoid overflow
/// with large values. An empty input yields an empty output.
///
/// If the maximum is infinite, the mass is split evenly over the entries equal
/// to it: `[inf, -inf]` gives `[1, 0]` and an all `-inf` input is uniform.
pub fn softmax(z: &[f64]) -> Vec<f64> {
    if z.is_empty() {
        return Vec::new();
    }

    let max_value = z.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_value.is_infinite() {
        let hits = z.iter().filter(|&&v| v == max_value).count() as f64;
        return z
            .iter()
            .map(|&v| if v == max_value { 1.0 / hits } else { 0.0 })
            .collect();
    }

    let mut out: Vec<f64> = z.iter().map(|&v| (v - max_value).exp()).collect();
    let inv_sum = 1.0 / out.iter().sum::<f64>();
    for value in out.iter_mut() {
        *value *= inv_sum;
    }
    out
}

/// Diagonal of the softmax Jacobian: s_i * (1 - s_i) with s = softmax(z).
///
/// The off-diagonal terms -s_i * s_j are dropped; the output delta treats this
/// as an independent elementwise factor.
pub fn softmax_deriv(z: &[f64]) -> Vec<f64> {
    softmax(z).into_iter().map(|s| s * (1.0 - s)).collect()
}
