//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// A *vector* is simply a matrix with one row or one column; operations
/// that need a vector inspect the shape at runtime.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix with every cell set to `initial`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize, initial: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            data: vec![initial; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows` or `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, 0.0)
    }

    /// Creates a new matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows` or `cols` is zero, and
    /// `DimensionMismatch` if data length doesn't equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an n-by-n identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `n` is zero.
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n, 0.0)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Backdoor constructor for shapes already known to be valid.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets the element at (row, col).
    ///
    /// Bounds are strict: `row == rows` or `col == cols` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self::from_raw(self.rows, self.cols, data))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self::from_raw(self.rows, self.cols, data))
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self::from_raw(
            self.rows,
            self.cols,
            self.data.iter().map(|x| x * scalar).collect(),
        )
    }

    /// Adds a scalar to each element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        Self::from_raw(
            self.rows,
            self.cols,
            self.data.iter().map(|x| x + scalar).collect(),
        )
    }

    /// Subtracts a scalar from each element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f64) -> Self {
        Self::from_raw(
            self.rows,
            self.cols,
            self.data.iter().map(|x| x - scalar).collect(),
        )
    }

    /// Divides each element by a scalar.
    ///
    /// Division by zero follows IEEE semantics and yields non-finite
    /// entries rather than an error.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Self {
        Self::from_raw(
            self.rows,
            self.cols,
            self.data.iter().map(|x| x / scalar).collect(),
        )
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self::from_raw(self.cols, self.rows, data)
    }

    /// Transposes the matrix in place, swapping its own rows and cols.
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    /// Matrix-matrix (or matrix-vector) multiplication.
    ///
    /// The product is defined when `self.cols == other.rows`. As a
    /// historical accommodation for row-vector-left callers the product
    /// is also accepted when `self.rows == other.rows`; the accumulation
    /// then runs over the shorter of the two inner dimensions. This
    /// fallback is not a general algebraic rule.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimensions` if neither condition holds.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows && self.rows != other.rows {
            return Err(MatrizError::IncompatibleDimensions {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let span = self.cols.min(other.rows);
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..span {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }

        Ok(Self::from_raw(self.rows, other.cols, data))
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        Ok(())
    }
}

/// Renders the matrix as a bordered grid, every column as wide as the
/// widest formatted value. Presentational only.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self
            .data
            .iter()
            .map(|v| format!("{v}").len())
            .max()
            .unwrap_or(0);
        let inner = self.cols * (w + 1);

        writeln!(f, "┌ {:inner$}┐", "")?;
        for i in 0..self.rows {
            write!(f, "│ ")?;
            for j in 0..self.cols {
                write!(f, "{:>w$} ", self.data[i * self.cols + j])?;
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "└ {:inner$}┘", "")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
