//! Typed column with embedded null sentinels (kdb-style)

use std::fmt;

use super::Value;
use crate::date;
use crate::error::{Error, Result};

pub use crate::date::NULL_DATE;

/// Null sentinel for I64 columns
pub const NULL_I64: i64 = i64::MIN;

/// Null sentinel for Bool columns (stored as i8: 0 = false, 1 = true)
pub const NULL_BOOL: i8 = i8::MIN;

/// Logical type of a column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    F64,
    I64,
    Date,
    Str,
    Bool,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::F64 => "F64",
            ColumnType::I64 => "I64",
            ColumnType::Date => "Date",
            ColumnType::Str => "Str",
            ColumnType::Bool => "Bool",
        };
        f.write_str(name)
    }
}

/// A typed column of data with type-specific null representation (kdb-style)
///
/// All nulls are embedded as sentinel values in the data vector:
/// - F64: f64::NAN
/// - I64: NULL_I64 (i64::MIN)
/// - Date: NULL_DATE (i32::MIN)
/// - Str: empty string
/// - Bool: NULL_BOOL (i8::MIN)
///
/// No validity bitmaps - predicates test the sentinel inline.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// F64 column: missing values are NaN
    F64(Vec<f64>),

    /// I64 column: missing values are NULL_I64
    I64(Vec<i64>),

    /// Date column: packed dates (see [`crate::date::packed`])
    ///
    /// Missing values represented as NULL_DATE (i32::MIN).
    /// Stored packed so comparisons are plain i32 compares.
    Date(Vec<i32>),

    /// Str column: missing values are empty strings
    Str(Vec<String>),

    /// Bool column: 0/1 bytes, missing values are NULL_BOOL
    Bool(Vec<i8>),
}

impl Column {
    pub fn new_f64(data: Vec<f64>) -> Self {
        Column::F64(data)
    }

    pub fn new_i64(data: Vec<i64>) -> Self {
        Column::I64(data)
    }

    /// Create Date column from already packed values
    pub fn new_date(data: Vec<i32>) -> Self {
        Column::Date(data)
    }

    pub fn new_str(data: Vec<String>) -> Self {
        Column::Str(data)
    }

    /// Create Bool column; `None` becomes NULL_BOOL
    pub fn new_bool(data: Vec<Option<bool>>) -> Self {
        Column::Bool(
            data.into_iter()
                .map(|b| b.map_or(NULL_BOOL, i8::from))
                .collect(),
        )
    }

    pub fn from_strs(data: &[&str]) -> Self {
        Column::Str(data.iter().map(|s| s.to_string()).collect())
    }

    /// Create Date column from calendar triples; `None` becomes NULL_DATE
    pub fn from_ymd(data: &[Option<(i32, u32, u32)>]) -> Result<Self> {
        let packed = data
            .iter()
            .map(|d| match *d {
                Some((y, m, day)) => date::pack(y, m, day),
                None => Ok(NULL_DATE),
            })
            .collect::<Result<Vec<i32>>>()?;
        Ok(Column::Date(packed))
    }

    pub fn len(&self) -> usize {
        match self {
            Column::F64(data) => data.len(),
            Column::I64(data) => data.len(),
            Column::Date(data) => data.len(),
            Column::Str(data) => data.len(),
            Column::Bool(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::F64(_) => ColumnType::F64,
            Column::I64(_) => ColumnType::I64,
            Column::Date(_) => ColumnType::Date,
            Column::Str(_) => ColumnType::Str,
            Column::Bool(_) => ColumnType::Bool,
        }
    }

    /// Whether the value at `row` is this type's null sentinel
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::F64(data) => data[row].is_nan(),
            Column::I64(data) => data[row] == NULL_I64,
            Column::Date(data) => data[row] == NULL_DATE,
            Column::Str(data) => data[row].is_empty(),
            Column::Bool(data) => data[row] == NULL_BOOL,
        }
    }

    /// Check if column contains any null values
    pub fn has_nulls(&self) -> bool {
        self.count_missing() > 0
    }

    pub fn count_missing(&self) -> usize {
        match self {
            Column::F64(data) => data.iter().filter(|x| x.is_nan()).count(),
            Column::I64(data) => data.iter().filter(|x| **x == NULL_I64).count(),
            Column::Date(data) => data.iter().filter(|x| **x == NULL_DATE).count(),
            Column::Str(data) => data.iter().filter(|x| x.is_empty()).count(),
            Column::Bool(data) => data.iter().filter(|x| **x == NULL_BOOL).count(),
        }
    }

    /// Value at `row`, `None` when out of bounds. Sentinels come back as
    /// their typed value (NaN, NULL_DATE, ...), except Bool which maps to
    /// `Value::Null`.
    pub fn get(&self, row: usize) -> Option<Value> {
        if row >= self.len() {
            return None;
        }
        let v = match self {
            Column::F64(data) => Value::F64(data[row]),
            Column::I64(data) => Value::I64(data[row]),
            Column::Date(data) => Value::Date(data[row]),
            Column::Str(data) => Value::Str(data[row].clone()),
            Column::Bool(data) => match data[row] {
                NULL_BOOL => Value::Null,
                b => Value::Bool(b != 0),
            },
        };
        Some(v)
    }

    /// Get raw F64 slice for monomorphic kernels
    #[inline]
    pub fn as_f64_slice(&self) -> Result<&[f64]> {
        match self {
            Column::F64(data) => Ok(data),
            other => Err(Error::type_mismatch("F64", other.column_type())),
        }
    }

    #[inline]
    pub fn as_i64_slice(&self) -> Result<&[i64]> {
        match self {
            Column::I64(data) => Ok(data),
            other => Err(Error::type_mismatch("I64", other.column_type())),
        }
    }

    /// Get raw packed Date slice for monomorphic kernels
    #[inline]
    pub fn as_date_slice(&self) -> Result<&[i32]> {
        match self {
            Column::Date(data) => Ok(data),
            other => Err(Error::type_mismatch("Date", other.column_type())),
        }
    }

    #[inline]
    pub fn as_str_slice(&self) -> Result<&[String]> {
        match self {
            Column::Str(data) => Ok(data),
            other => Err(Error::type_mismatch("Str", other.column_type())),
        }
    }

    #[inline]
    pub fn as_bool_slice(&self) -> Result<&[i8]> {
        match self {
            Column::Bool(data) => Ok(data),
            other => Err(Error::type_mismatch("Bool", other.column_type())),
        }
    }

    /// Fresh column holding the values at `indices`, in that order.
    ///
    /// Callers validate bounds; an out-of-range index panics.
    pub(crate) fn take(&self, indices: &[usize]) -> Column {
        fn pick<T: Clone>(data: &[T], indices: &[usize]) -> Vec<T> {
            indices.iter().map(|&i| data[i].clone()).collect()
        }
        match self {
            Column::F64(data) => Column::F64(pick(data, indices)),
            Column::I64(data) => Column::I64(pick(data, indices)),
            Column::Date(data) => Column::Date(pick(data, indices)),
            Column::Str(data) => Column::Str(pick(data, indices)),
            Column::Bool(data) => Column::Bool(pick(data, indices)),
        }
    }
}
