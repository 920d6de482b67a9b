//! Error taxonomy for filtering and row operations

use thiserror::Error;

use crate::table::ColumnType;

/// Errors surfaced by filter evaluation and row operations.
///
/// All of these are usage errors: they are reported to the caller of the
/// operation that detected them and are never retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the operation needed (a column type or a family of types)
        expected: String,
        found: ColumnType,
    },

    #[error("length mismatch: expected {expected} rows, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two selections computed against tables of different row counts.
    #[error("incompatible selections: universe of {left} rows vs {right} rows")]
    IncompatibleUniverse { left: usize, right: usize },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: ColumnType) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            found,
        }
    }
}
