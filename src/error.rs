//! Error types for matriz operations.
//!
//! Provides a closed error taxonomy for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Every failure mode of the library maps onto one of these four variants;
/// there are no string-keyed or open-ended errors. All failures are
/// deterministic and structural — none is worth retrying.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::WrongDimensions {
///     expected: "3x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimensions"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Data length or operand shapes don't match what the operation needs.
    WrongDimensions {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Row or column index outside its valid range.
    IndexNotExisting {
        /// The offending index
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// A pivot stayed zero after the fallback row swap during elimination.
    NotInvertible {
        /// Pivot row where elimination got stuck
        pivot_row: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::WrongDimensions { expected, actual } => {
                write!(f, "Wrong dimensions: expected {expected}, got {actual}")
            }
            MatrizError::IndexNotExisting { index, len } => {
                write!(f, "Index {index} does not exist (len={len})")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {rows}x{cols}")
            }
            MatrizError::NotInvertible { pivot_row } => {
                write!(
                    f,
                    "Matrix is not invertible: zero pivot at row {pivot_row}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a wrong-dimensions error with descriptive context
    #[must_use]
    pub fn wrong_dimensions(context: &str, expected: usize, actual: usize) -> Self {
        Self::WrongDimensions {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a shape mismatch error from two (rows, cols) pairs
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::WrongDimensions {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an index-not-existing error
    #[must_use]
    pub fn index_not_existing(index: usize, len: usize) -> Self {
        Self::IndexNotExisting { index, len }
    }
}

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
