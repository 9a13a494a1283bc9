//! Square integer matrices and the scalar multiplication kernels.
//!
//! Storage is one contiguous row-major `Vec<i32>`. The kernels operate on
//! plain slices so they can be benchmarked without the wrapper in the way.

pub mod naive_ijk;
pub mod unrolled;

use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Errors from the fallible [`Matrix`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("expected {dim}x{dim}={expected} elements, got {actual}")]
    LengthMismatch {
        dim: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row} has {len} elements, expected {dim}")]
    NotSquare { row: usize, len: usize, dim: usize },
}

/// An `n × n` matrix of `i32`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Every element set to `value`.
    pub fn filled(dim: usize, value: i32) -> Self {
        Self {
            dim,
            data: vec![value; dim * dim],
        }
    }

    pub fn zeros(dim: usize) -> Self {
        Self::filled(dim, 0)
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = 1;
        }
        m
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::LengthMismatch`] if `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<i32>) -> Result<Self, MatrixError> {
        if data.len() != dim * dim {
            return Err(MatrixError::LengthMismatch {
                dim,
                expected: dim * dim,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Builds a matrix from nested rows. The row count fixes the dimension.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] if any row length differs from the row count.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != dim {
                return Err(MatrixError::NotSquare {
                    row,
                    len: r.len(),
                    dim,
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self { dim, data })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.dim + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: i32) {
        self.data[i * self.dim + j] = value;
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn fill(&mut self, value: i32) {
        self.data.fill(value);
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        &mut self.data[i * self.dim + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_ones_on_diagonal() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], i32::from(i == j));
            }
        }
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.get(0, 1), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(MatrixError::NotSquare {
                row: 1,
                len: 1,
                dim: 2
            })
        );
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(3, vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::LengthMismatch {
                dim: 3,
                expected: 9,
                actual: 8
            }
        );
        assert_eq!(err.to_string(), "expected 3x3=9 elements, got 8");
    }

    #[test]
    fn set_and_fill() {
        let mut m = Matrix::zeros(2);
        m.set(1, 0, 7);
        m[(0, 1)] = 5;
        assert_eq!(m.as_slice(), &[0, 5, 7, 0]);
        m.fill(9);
        assert!(m.as_slice().iter().all(|&v| v == 9));
    }
}
