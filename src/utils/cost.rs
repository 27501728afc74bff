//! Mean squared error cost and its derivative.

use crate::error::{check_len, Result};

/// Mean of the squared differences between `y_true` and `y_pred`.
///
/// Empty vectors have zero cost.
pub fn mse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_len(y_true.len(), y_pred.len(), "mse")?;
    if y_true.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(sum / y_true.len() as f64)
}

/// Elementwise cost signal `y_pred - y_true` injected into the output delta.
pub fn mse_deriv(y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>> {
    check_len(y_true.len(), y_pred.len(), "mse_deriv")?;
    Ok(y_pred.iter().zip(y_true).map(|(p, t)| p - t).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_mse_perfect_prediction() {
        assert_eq!(mse(&[0.0, 1.0], &[0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        // ((0 - 0.5)^2 + (1 - 0.5)^2) / 2 = 0.25
        let cost = mse(&[0.0, 1.0], &[0.5, 0.5]).unwrap();
        assert!((cost - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_mse_deriv_sign() {
        let d = mse_deriv(&[0.0, 1.0], &[0.3, 0.7]).unwrap();
        assert!((d[0] - 0.3).abs() < 1e-12);
        assert!((d[1] + 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_mse_length_mismatch() {
        assert!(matches!(
            mse(&[0.0, 1.0], &[1.0]),
            Err(NetworkError::DimensionMismatch { operation: "mse", .. })
        ));
        assert!(mse_deriv(&[0.0], &[1.0, 0.0]).is_err());
    }
}
