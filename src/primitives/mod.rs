//! Core compute primitives (Matrix and its vector operations).
//!
//! These types provide the foundation for the algebra and the solver.

mod matrix;
mod vector_ops;

pub use matrix::Matrix;
