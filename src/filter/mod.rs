//! Deferred, reusable filters
//!
//! A [`Filter`] names the column(s) it reads but is not tied to any table:
//! column references are resolved each time [`Filter::apply`] runs, so one
//! filter can be evaluated against many tables. Resolution failures
//! (missing column, wrong type, wrong length) surface from `apply`.

pub mod query;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::predicate::{CompareOp, DatePredicate, StrPredicate};
use crate::selection::Selection;
use crate::table::{Column, Table, Value};

/// The column a filter reads: a name looked up at `apply` time, or a column
/// supplied up front.
#[derive(Clone, Debug)]
pub enum ColumnRef {
    Named(String),
    /// A materialized column; its length must match the table it is applied to
    Bound(Arc<Column>),
}

impl ColumnRef {
    pub fn named(name: impl Into<String>) -> Self {
        ColumnRef::Named(name.into())
    }

    pub fn bound(column: Column) -> Self {
        ColumnRef::Bound(Arc::new(column))
    }

    pub fn resolve<'a>(&'a self, table: &'a Table) -> Result<&'a Column> {
        match self {
            ColumnRef::Named(name) => table.column(name),
            ColumnRef::Bound(column) => {
                if column.len() != table.row_count() {
                    return Err(Error::LengthMismatch {
                        expected: table.row_count(),
                        found: column.len(),
                    });
                }
                Ok(column.as_ref())
            }
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::named(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::Named(name)
    }
}

impl From<Column> for ColumnRef {
    fn from(column: Column) -> Self {
        ColumnRef::bound(column)
    }
}

impl From<Arc<Column>> for ColumnRef {
    fn from(column: Arc<Column>) -> Self {
        ColumnRef::Bound(column)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Named(name) => f.write_str(name),
            ColumnRef::Bound(column) => {
                write!(f, "<{} column, {} rows>", column.column_type(), column.len())
            }
        }
    }
}

/// Right-hand side of a comparison
#[derive(Clone, Debug)]
pub enum Operand {
    Literal(Value),
    Column(ColumnRef),
}

#[derive(Clone, Debug)]
pub enum Filter {
    /// `column op operand`, row by row
    Compare {
        column: ColumnRef,
        op: CompareOp,
        operand: Operand,
    },
    Date {
        column: ColumnRef,
        predicate: DatePredicate,
    },
    Text {
        column: ColumnRef,
        predicate: StrPredicate,
    },
    /// Rows holding the column's null sentinel
    Missing { column: ColumnRef },
    Both(Box<Filter>, Box<Filter>),
    Either(Box<Filter>, Box<Filter>),
    /// Complement; rows with nulls are included
    Not(Box<Filter>),
}

impl Filter {
    pub fn compare(column: impl Into<ColumnRef>, op: CompareOp, literal: impl Into<Value>) -> Self {
        Filter::Compare {
            column: column.into(),
            op,
            operand: Operand::Literal(literal.into()),
        }
    }

    pub fn compare_columns(
        column: impl Into<ColumnRef>,
        op: CompareOp,
        other: impl Into<ColumnRef>,
    ) -> Self {
        Filter::Compare {
            column: column.into(),
            op,
            operand: Operand::Column(other.into()),
        }
    }

    pub fn and(self, other: Filter) -> Filter {
        Filter::Both(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Filter) -> Filter {
        Filter::Either(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Filter {
        Filter::Not(Box::new(self))
    }

    /// Evaluate against `table`, producing a selection over its rows
    pub fn apply(&self, table: &Table) -> Result<Selection> {
        let selection = match self {
            Filter::Compare {
                column,
                op,
                operand,
            } => {
                let column = column.resolve(table)?;
                match operand {
                    Operand::Literal(value) => column.eval(*op, value)?,
                    Operand::Column(other) => column.eval_column(*op, other.resolve(table)?)?,
                }
            }
            Filter::Date { column, predicate } => column.resolve(table)?.eval_date(*predicate)?,
            Filter::Text { column, predicate } => column.resolve(table)?.eval_str(predicate)?,
            Filter::Missing { column } => column.resolve(table)?.eval_missing(),
            Filter::Both(a, b) => a.apply(table)?.intersect(&b.apply(table)?)?,
            Filter::Either(a, b) => a.apply(table)?.union(&b.apply(table)?)?,
            Filter::Not(inner) => inner.apply(table)?.complement(),
        };

        trace!(
            filter = %self,
            rows = table.row_count(),
            selected = selection.size(),
            "filter applied"
        );
        Ok(selection)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Compare {
                column,
                op,
                operand,
            } => match operand {
                Operand::Literal(value) => write!(f, "{} {} {}", column, op.symbol(), value),
                Operand::Column(other) => write!(f, "{} {} {}", column, op.symbol(), other),
            },
            Filter::Date { column, predicate } => write!(f, "{} {:?}", column, predicate),
            Filter::Text { column, predicate } => write!(f, "{} {:?}", column, predicate),
            Filter::Missing { column } => write!(f, "{} is missing", column),
            Filter::Both(a, b) => write!(f, "({}) and ({})", a, b),
            Filter::Either(a, b) => write!(f, "({}) or ({})", a, b),
            Filter::Not(inner) => write!(f, "not ({})", inner),
        }
    }
}
