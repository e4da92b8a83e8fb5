//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// Extents are fixed at construction; the buffer is pre-allocated and never
/// grows. Operations that return a new `Matrix` never alias operand storage.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix with default contents.
    ///
    /// A square matrix starts as the identity; a rectangular one as all
    /// zeros.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::shape_mismatch((1, 1), (rows, cols)));
        }
        let mut data = vec![0.0; rows * cols];
        if rows == cols {
            for i in 0..rows {
                data[i * cols + i] = 1.0;
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix from a vector of data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if either extent is zero or data length
    /// doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::shape_mismatch((1, 1), (rows, cols)));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::wrong_dimensions(
                "data length",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Overwrites all cells from a row-major slice.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if the slice length doesn't match
    /// rows * cols.
    pub fn set_data(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.rows * self.cols {
            return Err(MatrizError::wrong_dimensions(
                "data length",
                self.rows * self.cols,
                values.len(),
            ));
        }
        self.data.copy_from_slice(values);
        Ok(())
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
    /// # Errors
    ///
    /// Returns `IndexNotExisting` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows {
            return Err(MatrizError::index_not_existing(row, self.rows));
        }
        if col >= self.cols {
            return Err(MatrizError::index_not_existing(col, self.cols));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col).
    ///
    /// Writes outside the declared extents are ignored; the matrix never
    /// grows.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Overwrites all cells with the identity pattern.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a rectangular matrix.
    pub fn set_identity(&mut self) -> Result<()> {
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data.fill(0.0);
        for i in 0..self.rows {
            self.data[i * self.cols + i] = 1.0;
        }
        Ok(())
    }

    /// Rounds every cell to the nearest integer value, in place.
    ///
    /// Ties round away from zero (`f64::round` semantics).
    pub fn round(&mut self) {
        for value in &mut self.data {
            *value = value.round();
        }
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output cell accumulates left to right over the shared dimension,
    /// starting at zero.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::wrong_dimensions(
                "rows",
                self.cols,
                other.rows,
            ));
        }
        let mut result = vec![0.0; self.rows * other.cols];
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[row * self.cols + k] * other.data[k * other.cols + col];
                }
                result[row * other.cols + col] = sum;
            }
        }
        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` unless `self.cols == vec.len()`.
    pub fn matvec(&self, vec: &Vector) -> Result<Vector> {
        if self.cols != vec.len() {
            return Err(MatrizError::wrong_dimensions("rows", self.cols, vec.len()));
        }
        let result: Vec<f64> = (0..self.rows)
            .map(|row| {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[row * self.cols + k] * vec.as_slice()[k];
                }
                sum
            })
            .collect();
        Vector::from_vec(result)
    }

    /// Multiplies by the transpose of `other` without materializing it.
    ///
    /// Computes `self * other^T`; the result is `self.rows x other.rows`
    /// with `result[i][j] = sum_k self[i][k] * other[j][k]`.
    ///
    /// # Errors
    ///
    /// Returns `WrongDimensions` unless both matrices have the same number
    /// of columns.
    pub fn matmul_transpose(&self, other: &Self) -> Result<Self> {
        if self.cols != other.cols {
            return Err(MatrizError::wrong_dimensions(
                "cols",
                self.cols,
                other.cols,
            ));
        }
        let mut result = vec![0.0; self.rows * other.rows];
        for row in 0..self.rows {
            for col in 0..other.rows {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[row * self.cols + k] * other.data[col * other.cols + k];
                }
                result[row * other.rows + col] = sum;
            }
        }
        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.rows,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                data[col * self.rows + row] = self.data[row * self.cols + col];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Replaces the matrix with (identity - self), in place.
    ///
    /// A cell-wise transform: off-diagonal cells are negated, diagonal
    /// cells become `1 - value`. Valid for rectangular matrices too; only
    /// diagonal positions that exist within range get the `1 -` treatment.
    pub fn subtract_from_identity(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = self.data[row * self.cols + col];
                self.data[row * self.cols + col] =
                    if row == col { 1.0 - value } else { -value };
            }
        }
    }

    /// Multiplies every cell by a scalar, in place.
    pub fn scale(&mut self, scalar: f64) {
        for value in &mut self.data {
            *value *= scalar;
        }
    }

    /// Returns a scaled copy; the receiver is untouched.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Exchanges the contents of two rows.
    ///
    /// Swapping a row with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `IndexNotExisting` if either index is out of range.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        if row1 == row2 {
            return Ok(());
        }
        self.check_row(row1)?;
        self.check_row(row2)?;
        for col in 0..self.cols {
            self.data.swap(row1 * self.cols + col, row2 * self.cols + col);
        }
        Ok(())
    }

    /// Multiplies every cell in one row by a scalar.
    ///
    /// # Errors
    ///
    /// Returns `IndexNotExisting` if the row is out of range.
    pub fn scale_row(&mut self, row: usize, scalar: f64) -> Result<()> {
        self.check_row(row)?;
        for col in 0..self.cols {
            self.data[row * self.cols + col] *= scalar;
        }
        Ok(())
    }

    /// Adds `scalar` times row `row2` onto row `row1`, cell-wise.
    ///
    /// Shearing a row with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `IndexNotExisting` if either index is out of range.
    pub fn shear_row(&mut self, row1: usize, row2: usize, scalar: f64) -> Result<()> {
        if row1 == row2 {
            return Ok(());
        }
        self.check_row(row1)?;
        self.check_row(row2)?;
        for col in 0..self.cols {
            let addend = self.data[row2 * self.cols + col] * scalar;
            self.data[row1 * self.cols + col] += addend;
        }
        Ok(())
    }

    /// Inverts the matrix via Gauss-Jordan elimination, destructively.
    ///
    /// The receiver is reduced to the identity while an output matrix,
    /// starting as the identity, accumulates the inverse. A zero diagonal
    /// triggers one fixed fallback: swap with the last row. This is not a
    /// full partial-pivot search; a matrix whose only usable pivot sits in
    /// some middle row is reported as not invertible. Documented limitation.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a rectangular matrix, `NotInvertible` when a
    /// pivot stays zero after the fallback swap.
    pub fn destructive_invert(&mut self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let mut output = Self::new(n, n)?;

        for row in 0..n {
            if self.data[row * n + row] == 0.0 {
                self.swap_rows(row, n - 1)?;
                output.swap_rows(row, n - 1)?;
                if self.data[row * n + row] == 0.0 {
                    return Err(MatrizError::NotInvertible { pivot_row: row });
                }
            }

            let scalar = 1.0 / self.data[row * n + row];
            self.scale_row(row, scalar)?;
            output.scale_row(row, scalar)?;

            for shearing_row in 0..n {
                if shearing_row == row {
                    continue;
                }
                let scalar = -self.data[shearing_row * n + row];
                self.shear_row(shearing_row, row, scalar)?;
                output.shear_row(shearing_row, row, scalar)?;
            }
        }
        Ok(output)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrizError::index_not_existing(row, self.rows));
        }
        Ok(())
    }
}

/// Exact equality: same shape and every cell difference is exactly zero.
///
/// No epsilon tolerance. The subtraction rule means `NaN` cells never
/// compare equal and matching infinities don't either.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a - b == 0.0)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;
