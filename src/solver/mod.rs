//! Linear-system solving.
//!
//! Gaussian elimination with partial pivoting; see [`crate::primitives::Matrix::solve`].

mod gaussian;
