//! Scalar values (literals and single cells)

use std::fmt;

use super::ColumnType;
use crate::date;

/// A single cell value, or a literal operand for a comparison filter.
///
/// Dates are carried in packed form (see [`crate::date::packed`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    F64(f64),
    I64(i64),
    Date(i32),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Whether this value is its type's missing marker
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::F64(v) => v.is_nan(),
            Value::I64(v) => *v == super::NULL_I64,
            Value::Date(v) => date::packed::is_missing(*v),
            Value::Str(s) => s.is_empty(),
            Value::Bool(_) => false,
        }
    }

    /// Column type this literal naturally compares against; `None` for `Null`
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::F64(_) => Some(ColumnType::F64),
            Value::I64(_) => Some(ColumnType::I64),
            Value::Date(_) => Some(ColumnType::Date),
            Value::Str(_) => Some(ColumnType::Str),
            Value::Bool(_) => Some(ColumnType::Bool),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::F64(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::Date(v) => match date::unpack(*v) {
                Some((y, m, d)) => write!(f, "{:04}-{:02}-{:02}", y, m, d),
                None => f.write_str("null"),
            },
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
