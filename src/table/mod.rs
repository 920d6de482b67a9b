//! Core table and column types

pub mod bitmap;
pub mod column;
pub mod eval;
pub mod rows;
pub mod value;

pub use bitmap::Bitmap;
pub use column::{Column, ColumnType, NULL_BOOL, NULL_DATE, NULL_I64};
pub use value::Value;

use std::collections::HashSet;

use crate::error::{Error, Result};

/// A table is a collection of named, typed, equal-length columns
///
/// Names are unique and kept in insertion order. Row operations never
/// mutate a table; they build a new one with freshly copied columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(Error::InvalidArgument(format!(
                "{} names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let rows = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
                return Err(Error::LengthMismatch {
                    expected: rows,
                    found: bad.len(),
                });
            }
        }

        Ok(Self { names, columns })
    }

    /// Build from `(name, column)` pairs
    pub fn from_columns<S: Into<String>>(
        columns: impl IntoIterator<Item = (S, Column)>,
    ) -> Result<Self> {
        let (names, columns): (Vec<String>, Vec<Column>) = columns
            .into_iter()
            .map(|(name, col)| (name.into(), col))
            .unzip();
        Self::new(names, columns)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Iterate `(name, column)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(&self.columns)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Value at (`row`, column `name`)
    pub fn get(&self, row: usize, name: &str) -> Result<Value> {
        let column = self.column(name)?;
        column.get(row).ok_or_else(|| {
            Error::OutOfRange(format!("row {} of {} rows", row, self.row_count()))
        })
    }

    /// New table keeping only the named columns, in table order
    pub fn retain_columns(&self, names: &[&str]) -> Result<Table> {
        self.check_names(names)?;
        Ok(self.keep_columns(|name| names.contains(&name)))
    }

    /// New table without the named columns
    pub fn remove_columns(&self, names: &[&str]) -> Result<Table> {
        self.check_names(names)?;
        Ok(self.keep_columns(|name| !names.contains(&name)))
    }

    fn check_names(&self, names: &[&str]) -> Result<()> {
        match names.iter().find(|n| !self.contains_column(n)) {
            Some(missing) => Err(Error::ColumnNotFound(missing.to_string())),
            None => Ok(()),
        }
    }

    fn keep_columns(&self, keep: impl Fn(&str) -> bool) -> Table {
        let (names, columns) = self
            .iter()
            .filter(|(name, _)| keep(name))
            .map(|(name, col)| (name.to_string(), col.clone()))
            .unzip();
        Table { names, columns }
    }

    /// Same columns and names, each projected through `indices`
    pub(crate) fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
        }
    }
}
