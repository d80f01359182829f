//! Error types for matriz operations.
//!
//! Every fallible operation reports which dimension failed and why.

use std::fmt;

/// Main error type for matriz operations.
///
/// Validation failures carry the offending shapes so callers can see
/// exactly which dimension mismatched.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::NotSquare { rows: 2, cols: 3 };
/// assert!(err.to_string().contains("not square"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// A matrix was requested with a zero row or column count.
    InvalidDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Element access outside `[0, rows) x [0, cols)`.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Matrix shapes don't match for an elementwise operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operand of a vector operation is not a row or column vector.
    NotAVector {
        /// Operand rows
        rows: usize,
        /// Operand columns
        cols: usize,
    },

    /// Two vectors have different lengths.
    LengthMismatch {
        /// Left operand length
        left: usize,
        /// Right operand length
        right: usize,
    },

    /// Cross-product operands are not in the same orientation.
    OrientationMismatch {
        /// Left operand shape
        left: (usize, usize),
        /// Right operand shape
        right: (usize, usize),
    },

    /// Cross product on vectors whose length is not 3.
    DimensionError {
        /// Normalized vector length found
        len: usize,
    },

    /// Operand shapes admit no matrix product.
    IncompatibleDimensions {
        /// Left operand shape
        left: (usize, usize),
        /// Right operand shape
        right: (usize, usize),
    },

    /// The solver was given a non-square coefficient matrix.
    NotSquare {
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
    },

    /// The solver's right-hand side is not a compatible column vector.
    IncompatibleVector {
        /// Coefficient matrix row count
        matrix_rows: usize,
        /// Right-hand side shape found
        vector: (usize, usize),
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimension { rows, cols } => {
                write!(
                    f,
                    "invalid matrix dimensions {rows}x{cols}: rows and cols must be nonzero"
                )
            }
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotAVector { rows, cols } => {
                write!(f, "operand is not a vector: {rows}x{cols}")
            }
            MatrizError::LengthMismatch { left, right } => {
                write!(f, "vectors are varying in length: {left} vs {right}")
            }
            MatrizError::OrientationMismatch { left, right } => {
                write!(
                    f,
                    "vectors are not in the same orientation: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrizError::DimensionError { len } => {
                write!(f, "cross product requires vectors of length 3, got {len}")
            }
            MatrizError::IncompatibleDimensions { left, right } => {
                write!(
                    f,
                    "incompatible dimensions for multiplication: {}x{} * {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows}x{cols}")
            }
            MatrizError::IncompatibleVector { matrix_rows, vector } => {
                write!(
                    f,
                    "right-hand side incompatible with matrix: expected {matrix_rows}x1, got {}x{}",
                    vector.0, vector.1
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = MatrizError::InvalidDimension { rows: 0, cols: 3 };
        let msg = err.to_string();
        assert!(msg.contains("invalid matrix dimensions"));
        assert!(msg.contains("0x3"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrizError::IndexOutOfRange {
            row: 5,
            col: 0,
            rows: 3,
            cols: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("(5, 0)"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "2x3".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_not_a_vector_display() {
        let err = MatrizError::NotAVector { rows: 2, cols: 3 };
        assert!(err.to_string().contains("not a vector"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = MatrizError::LengthMismatch { left: 3, right: 4 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_orientation_mismatch_display() {
        let err = MatrizError::OrientationMismatch {
            left: (1, 3),
            right: (3, 1),
        };
        assert!(err.to_string().contains("orientation"));
    }

    #[test]
    fn test_dimension_error_display() {
        let err = MatrizError::DimensionError { len: 4 };
        let msg = err.to_string();
        assert!(msg.contains("cross product"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_incompatible_dimensions_display() {
        let err = MatrizError::IncompatibleDimensions {
            left: (2, 3),
            right: (2, 2),
        };
        let msg = err.to_string();
        assert!(msg.contains("2x3"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_incompatible_vector_display() {
        let err = MatrizError::IncompatibleVector {
            matrix_rows: 3,
            vector: (2, 1),
        };
        let msg = err.to_string();
        assert!(msg.contains("3x1"));
        assert!(msg.contains("2x1"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::NotSquare { rows: 2, cols: 3 };
        assert!(err == "matrix is not square: 2x3");
        assert!("matrix is not square: 2x3" == err);
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrizError>();
        assert_sync::<MatrizError>();
    }
}
