//! Core dense primitives (Matrix, Vector).
//!
//! These types are the whole surface of the library: a row-major dense
//! matrix with elementary row operations and Gauss-Jordan inversion, and a
//! column vector backed by it.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
