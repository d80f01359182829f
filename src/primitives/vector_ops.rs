//! Dot and cross products over one-row / one-column matrices.
//!
//! Operands may arrive in either orientation; both are normalized to row
//! vectors before the arithmetic and the cross-product result is put back
//! in the orientation of the left operand.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Normalizes a pair of operands to row-vector form.
///
/// The left operand is transposed whenever it is not already a row; the
/// right operand is then transposed whenever its length doesn't match the
/// left's. Shapes that still aren't rows afterwards were never vectors.
fn normalize_pair(a: &Matrix, b: &Matrix) -> Result<(Matrix, Matrix)> {
    let mut a = a.clone();
    let mut b = b.clone();

    if a.n_rows() != 1 {
        a.transpose_in_place();
    }
    if b.n_cols() != a.n_cols() {
        b.transpose_in_place();
    }

    if a.n_rows() != 1 {
        return Err(MatrizError::NotAVector {
            rows: a.n_rows(),
            cols: a.n_cols(),
        });
    }
    if b.n_rows() != 1 {
        return Err(MatrizError::NotAVector {
            rows: b.n_rows(),
            cols: b.n_cols(),
        });
    }
    if a.n_cols() != b.n_cols() {
        return Err(MatrizError::LengthMismatch {
            left: a.n_cols(),
            right: b.n_cols(),
        });
    }

    Ok((a, b))
}

impl Matrix {
    /// Dot product of two vectors, row or column oriented.
    ///
    /// # Errors
    ///
    /// Returns `NotAVector` if an operand has more than one row after
    /// normalization, or `LengthMismatch` if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let c = Matrix::from_vec(1, 3, vec![1.0, 3.0, -5.0]).unwrap();
    /// let d = Matrix::from_vec(3, 1, vec![4.0, -2.0, -1.0]).unwrap();
    /// assert_eq!(c.dot(&d).unwrap(), 3.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<f64> {
        let (a, b) = normalize_pair(self, other)?;
        Ok(a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| x * y)
            .sum())
    }

    /// Cross product of two 3D vectors.
    ///
    /// Both operands must share the same original orientation. The result
    /// matches the orientation of `self`.
    ///
    /// # Errors
    ///
    /// Returns `OrientationMismatch` if the original shapes differ,
    /// `NotAVector` / `LengthMismatch` as for [`Matrix::dot`], and
    /// `DimensionError` if the vectors are not of length 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::OrientationMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (a, b) = normalize_pair(self, other)?;
        if a.n_cols() != 3 {
            return Err(MatrizError::DimensionError { len: a.n_cols() });
        }

        let av = a.as_slice();
        let bv = b.as_slice();
        let mut res = Matrix::from_raw(
            1,
            3,
            vec![
                av[1] * bv[2] - av[2] * bv[1],
                av[2] * bv[0] - av[0] * bv[2],
                av[0] * bv[1] - av[1] * bv[0],
            ],
        );

        // computed as a row; flip back if the operands were columns
        if self.n_cols() != 3 {
            res.transpose_in_place();
        }

        Ok(res)
    }
}

#[cfg(test)]
#[path = "vector_ops_tests.rs"]
mod tests;
