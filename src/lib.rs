//! Matriz: small dense-matrix arithmetic library in pure Rust.
//!
//! Matriz provides a row-major `f64` matrix with elementary algebra
//! (addition, subtraction, scalar operations, transpose, dot and cross
//! products, matrix multiplication) and a linear-system solver using
//! Gaussian elimination with partial pivoting.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! // Solve M * v = q
//! let m = Matrix::from_vec(3, 3, vec![
//!     9.0, 3.0, 4.0,
//!     4.0, 3.0, 4.0,
//!     1.0, 1.0, 1.0,
//! ]).unwrap();
//! let q = Matrix::from_vec(3, 1, vec![7.0, 8.0, 3.0]).unwrap();
//!
//! let v = m.solve(&q).unwrap();
//! let residual = m.matmul(&v).unwrap().sub(&q).unwrap();
//! assert!(residual.as_slice().iter().all(|r| r.abs() < 1e-9));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the `Matrix` type, element access and algebra
//! - [`solver`]: Gaussian elimination with partial pivoting
//! - [`error`]: error taxonomy for shape and index validation
//!
//! Singular systems are a documented exception to the typed-error rule:
//! the solver propagates non-finite values instead of failing, see
//! [`primitives::Matrix::solve`].

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod solver;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
