// Tests for matrix operations: matrix-vector products, outer product, hadamard.

use approx::assert_relative_eq;
use backprop_mlp::utils::{argmax, hadamard, Matrix};
use backprop_mlp::NetworkError;

#[test]
fn test_dot_identity() {
    let identity = Matrix::from_fn(3, 3, |r, c| if r == c { 1.0 } else { 0.0 });
    assert_eq!(identity.dot(&[1.5, -2.0, 3.0]).unwrap(), vec![1.5, -2.0, 3.0]);
}

#[test]
fn test_dot_rectangular() {
    // [[1, 2], [3, 4], [5, 6]] · [1, -1] = [-1, -1, -1]
    let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let out = m.dot(&[1.0, -1.0]).unwrap();
    assert_eq!(out.len(), 3);
    for v in out {
        assert_relative_eq!(v, -1.0);
    }
}

#[test]
fn test_transpose_dot_matches_explicit_transpose() {
    let m = Matrix::from_vec(2, 3, vec![0.5, -1.0, 2.0, 3.0, 0.25, -0.5]).unwrap();
    let t = Matrix::from_fn(3, 2, |r, c| m.get(c, r).unwrap());
    let v = [0.3, -0.7];
    let a = m.transpose_dot(&v).unwrap();
    let b = t.dot(&v).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

#[test]
fn test_dot_dimension_mismatch_reports_operation() {
    let m = Matrix::zeros(2, 3);
    match m.dot(&[1.0, 2.0]) {
        Err(NetworkError::DimensionMismatch {
            expected,
            actual,
            operation,
        }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
            assert_eq!(operation, "Matrix::dot");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_outer_product_shape_and_values() {
    let m = Matrix::outer(&[1.0, -2.0, 0.5], &[4.0, 2.0]);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.as_slice(), &[4.0, 2.0, -8.0, -4.0, 2.0, 1.0]);
}

#[test]
fn test_check_shape() {
    let m = Matrix::zeros(2, 3);
    assert!(m.check_shape((2, 3), "test").is_ok());
    assert!(matches!(
        m.check_shape((3, 2), "test"),
        Err(NetworkError::ShapeMismatch {
            expected: (3, 2),
            actual: (2, 3),
            ..
        })
    ));
}

#[test]
fn test_hadamard_and_argmax() {
    assert_eq!(
        hadamard(&[1.0, -1.0, 2.0], &[0.5, 0.5, 0.5]).unwrap(),
        vec![0.5, -0.5, 1.0]
    );
    assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some(1));
    assert_eq!(argmax(&[0.0, 1.0, 1.0]), Some(1));
}
