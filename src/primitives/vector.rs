//! Column vector type backed by a one-column matrix.

use super::Matrix;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A column vector: a [`Matrix`] constrained to exactly one column.
///
/// Wraps a one-column matrix and delegates all matrix-level behavior to it,
/// adding vector-only addition, subtraction, and indexing. `clone()` is the
/// deep copy; clones share no storage with the source.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("non-empty");
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    inner: Matrix,
}

impl Vector {
    /// Creates a zero vector.
    ///
    /// Always all zeros, even for a single row where the square-matrix
    /// default would be the identity.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if `rows` is zero.
    pub fn new(rows: usize) -> Result<Self> {
        let inner = Matrix::from_vec(rows, 1, vec![0.0; rows])?;
        Ok(Self { inner })
    }

    /// Creates a vector from owned data.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` for empty data.
    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        let rows = data.len();
        let inner = Matrix::from_vec(rows, 1, data)?;
        Ok(Self { inner })
    }

    /// Creates a vector by copying a slice.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` for an empty slice.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Wraps a one-column matrix.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` unless the matrix has exactly one column.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        if matrix.n_cols() != 1 {
            return Err(MatrizError::shape_mismatch(
                (matrix.n_rows(), 1),
                matrix.shape(),
            ));
        }
        Ok(Self { inner: matrix })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.n_rows()
    }

    /// Returns true if the vector has no rows.
    ///
    /// Construction rejects empty vectors, so this is always false; it
    /// exists for the conventional `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the element at `row`.
    ///
    /// # Errors
    ///
    /// Returns `IndexNotExisting` if the row is out of bounds.
    pub fn get(&self, row: usize) -> Result<f64> {
        self.inner.get(row, 0)
    }

    /// Sets the element at `row`; out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, value: f64) {
        self.inner.set(row, 0, value);
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(MatrizError::wrong_dimensions(
                "rows",
                self.len(),
                other.len(),
            ));
        }
        let inner = self.inner.add(&other.inner)?;
        Ok(Self { inner })
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(MatrizError::wrong_dimensions(
                "rows",
                self.len(),
                other.len(),
            ));
        }
        let data: Vec<f64> = self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(a, b)| a - b)
            .collect();
        Self::from_vec(data)
    }

    /// Multiplies every element by a scalar, in place.
    pub fn scale(&mut self, scalar: f64) {
        self.inner.scale(scalar);
    }

    /// Returns a scaled copy; the receiver is untouched.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            inner: self.inner.mul_scalar(scalar),
        }
    }

    /// Rounds every element to the nearest integer value, in place.
    pub fn round(&mut self) {
        self.inner.round();
    }

    /// Views the vector as a one-column matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    /// Mutable view of the backing one-column matrix.
    ///
    /// The extents stay fixed through this view, so the one-column shape
    /// cannot be broken.
    pub fn as_matrix_mut(&mut self) -> &mut Matrix {
        &mut self.inner
    }

    /// Unwraps into the backing one-column matrix.
    #[must_use]
    pub fn into_matrix(self) -> Matrix {
        self.inner
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.inner.as_slice()[index]
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_contract;
