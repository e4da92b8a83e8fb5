//! Matriz: dense matrix and column-vector primitives in pure Rust.
//!
//! A minimal numeric building block for embedders (small robotics, filter,
//! and graphics code): a row-major dense [`Matrix`] with arithmetic
//! operators, elementary row operations, and in-place Gauss-Jordan
//! inversion, plus a column [`Vector`] backed by it. No decompositions, no
//! sparse storage, no generic numeric types.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let mut m = Matrix::from_vec(3, 3, vec![
//!     3.0, 1.0, 0.0,
//!     -1.0, 3.0, -1.0,
//!     0.0, -3.0, 1.0,
//! ]).unwrap();
//! let original = m.clone();
//!
//! // Inversion reduces the receiver to the identity while building the
//! // inverse in a separate matrix.
//! let inverse = m.destructive_invert().unwrap();
//!
//! let mut product = original.matmul(&inverse).unwrap();
//! product.round();
//! assert_eq!(product, Matrix::new(3, 3).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix and Vector types
//! - [`error`]: Closed error taxonomy and `Result` alias
//!
//! # Failure model
//!
//! Every fallible operation reports synchronously through
//! [`error::MatrizError`]; an operation either returns a fully populated
//! result or no result at all. One asymmetry is contractual: indexed reads
//! fail on out-of-range indices, while direct cell writes outside the
//! declared extents are silent no-ops.

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, Vector};
