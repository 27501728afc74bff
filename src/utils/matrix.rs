//! Dense row-major matrix and the vector operations the engines need.

use crate::error::{check_len, NetworkError, Result};

/// Row-major matrix of `f64` values.
///
/// Entry (r, c) lives at `data[r * cols + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Matrix of zeros with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap row-major `data`; its length must be `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_len(rows * cols, data.len(), "Matrix::from_vec")?;
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by calling `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Matrix-vector product `self · v`; `v.len()` must equal `cols`.
    pub fn dot(&self, v: &[f64]) -> Result<Vec<f64>> {
        check_len(self.cols, v.len(), "Matrix::dot")?;
        if self.cols == 0 {
            return Ok(vec![0.0; self.rows]);
        }
        Ok(self
            .data
            .chunks_exact(self.cols)
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect())
    }

    /// Transposed product `selfᵀ · v`; `v.len()` must equal `rows`.
    pub fn transpose_dot(&self, v: &[f64]) -> Result<Vec<f64>> {
        check_len(self.rows, v.len(), "Matrix::transpose_dot")?;
        let mut out = vec![0.0; self.cols];
        if self.cols == 0 {
            return Ok(out);
        }
        for (row, &scale) in self.data.chunks_exact(self.cols).zip(v) {
            for (o, w) in out.iter_mut().zip(row) {
                *o += w * scale;
            }
        }
        Ok(out)
    }

    /// Outer product `a ⊗ b`, shape (a.len(), b.len()).
    pub fn outer(a: &[f64], b: &[f64]) -> Self {
        Self::from_fn(a.len(), b.len(), |r, c| a[r] * b[c])
    }

    /// Fails with [`NetworkError::ShapeMismatch`] unless `self` has `expected` shape.
    pub fn check_shape(&self, expected: (usize, usize), operation: &'static str) -> Result<()> {
        if self.shape() == expected {
            Ok(())
        } else {
            Err(NetworkError::ShapeMismatch {
                expected,
                actual: self.shape(),
                operation,
            })
        }
    }
}

/// Elementwise product of two equal-length vectors.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len(a.len(), b.len(), "hadamard")?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// Index of the largest entry; the first one wins on ties. `None` when empty.
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in v.iter().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_length_check() {
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_dot() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dot(&[1.0, 0.0, -1.0]).unwrap(), vec![-2.0, -2.0]);
        assert!(m.dot(&[1.0, 0.0]).is_err());
    }

    #[test]
    fn test_transpose_dot() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.transpose_dot(&[1.0, 2.0]).unwrap(), vec![9.0, 12.0, 15.0]);
        assert!(m.transpose_dot(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_outer() {
        let m = Matrix::outer(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1), Some(&[6.0, 8.0, 10.0][..]));
    }

    #[test]
    fn test_row_out_of_range() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.row(1), Some(&[0.0, 0.0, 0.0][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(Matrix::zeros(0, 4).row(0), None);
    }

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_hadamard() {
        assert_eq!(hadamard(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), vec![3.0, 8.0]);
        assert!(hadamard(&[1.0], &[1.0, 2.0]).is_err());
    }
}
