// Finite-difference checks for the activation derivatives used in backprop.

use approx::assert_relative_eq;
use backprop_mlp::utils::{sigmoid, sigmoid_deriv, softmax, softmax_deriv};

const H: f64 = 1e-6;

// Central difference of output `i` of `f` with respect to input `i`.
fn diagonal_derivative(f: fn(&[f64]) -> Vec<f64>, z: &[f64], i: usize) -> f64 {
    let mut plus = z.to_vec();
    let mut minus = z.to_vec();
    plus[i] += H;
    minus[i] -= H;
    (f(&plus)[i] - f(&minus)[i]) / (2.0 * H)
}

#[test]
fn test_sigmoid_deriv_matches_finite_difference() {
    let z = [-3.0, -0.5, 0.0, 0.7, 2.5];
    let analytic = sigmoid_deriv(&z);
    for i in 0..z.len() {
        let numeric = diagonal_derivative(sigmoid, &z, i);
        assert_relative_eq!(analytic[i], numeric, epsilon = 1e-8);
    }
}

#[test]
fn test_softmax_deriv_matches_jacobian_diagonal() {
    let z = [0.3, -1.2, 2.0, 0.0];
    let analytic = softmax_deriv(&z);
    for i in 0..z.len() {
        let numeric = diagonal_derivative(softmax, &z, i);
        assert_relative_eq!(analytic[i], numeric, epsilon = 1e-8);
    }
}

#[test]
fn test_softmax_off_diagonal_terms_are_not_zero() {
    // The output delta uses only the diagonal; the cross terms do exist.
    let z = [0.3, -1.2, 2.0];
    let mut plus = z.to_vec();
    let mut minus = z.to_vec();
    plus[1] += H;
    minus[1] -= H;
    let cross = (softmax(&plus)[0] - softmax(&minus)[0]) / (2.0 * H);

    let s = softmax(&z);
    assert_relative_eq!(cross, -s[0] * s[1], epsilon = 1e-8);
}
