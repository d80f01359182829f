//! Gaussian elimination with partial pivoting and back substitution.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

impl Matrix {
    /// Solves the linear system `self * v = q` for `v`.
    ///
    /// Works on private copies of the coefficient matrix and the
    /// right-hand side; the inputs are never mutated. Elimination runs
    /// with partial pivoting (largest absolute value in the pivot
    /// column), then back substitution produces `v` as a column vector.
    ///
    /// Division by the pivot is unguarded: for a singular system the
    /// solution contains non-finite entries (`inf`/`NaN`) instead of an
    /// error being raised. Callers wanting strict singularity detection
    /// should check the result with `f64::is_finite`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the coefficient matrix isn't square, and
    /// `IncompatibleVector` if `q` is not a column vector with one entry
    /// per matrix row.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(3, 3, vec![9.0, 3.0, 4.0, 4.0, 3.0, 4.0, 1.0, 1.0, 1.0]).unwrap();
    /// let q = Matrix::from_vec(3, 1, vec![7.0, 8.0, 3.0]).unwrap();
    /// let v = m.solve(&q).unwrap();
    /// assert!((v.get(1, 0).unwrap() - 4.0).abs() < 1e-9);
    /// ```
    pub fn solve(&self, q: &Self) -> Result<Self> {
        let n = self.n_rows();
        if self.n_cols() != n {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        if q.n_rows() != n || q.n_cols() != 1 {
            return Err(MatrizError::IncompatibleVector {
                matrix_rows: n,
                vector: q.shape(),
            });
        }

        let mut m = self.clone();
        let mut rhs = q.clone();
        let mm = m.as_mut_slice();
        let qq = rhs.as_mut_slice();

        // forward elimination: reduce to upper-triangular form
        for i in 0..n {
            // partial pivoting: bring the largest |entry| of column i
            // below the diagonal up to the pivot position
            let mut max = mm[i * n + i].abs();
            let mut pivot_row = i;
            for j in i + 1..n {
                let cand = mm[j * n + i].abs();
                if cand > max {
                    max = cand;
                    pivot_row = j;
                }
            }
            if pivot_row != i {
                for k in 0..n {
                    mm.swap(i * n + k, pivot_row * n + k);
                }
                qq.swap(i, pivot_row);
            }

            // zero out column i below the pivot
            for j in i + 1..n {
                let f = mm[j * n + i] / mm[i * n + i];
                for k in i + 1..n {
                    mm[j * n + k] -= f * mm[i * n + k];
                }
                mm[j * n + i] = 0.0;
                qq[j] -= f * qq[i];
            }
        }

        // back substitution
        let mut v = vec![0.0; n];
        for i in (0..n).rev() {
            let mut acc = qq[i];
            for j in i + 1..n {
                acc -= v[j] * mm[i * n + j];
            }
            v[i] = acc / mm[i * n + i];
        }

        Ok(Matrix::from_raw(n, 1, v))
    }
}

#[cfg(test)]
#[path = "gaussian_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_solver_contract.rs"]
mod contract;
