//! Row operations
//!
//! Every operation here builds a new [`Table`] whose columns are fresh copies
//! of the selected rows; the source table is never touched.

use rand::seq::index;
use tracing::debug;

use super::Table;
use crate::config::SamplingConfig;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::selection::Selection;

impl Table {
    /// Rows matching `filter`, in ascending row order
    pub fn select_where(&self, filter: &Filter) -> Result<Table> {
        let selection = filter.apply(self)?;
        Ok(self.take_selection(&selection, "select_where"))
    }

    /// Rows not matching `filter` (the complement of [`Table::select_where`])
    pub fn drop_where(&self, filter: &Filter) -> Result<Table> {
        let selection = filter.apply(self)?.complement();
        Ok(self.take_selection(&selection, "drop_where"))
    }

    /// Rows in `selection`; it must have been computed for this table's row count
    pub fn project(&self, selection: &Selection) -> Result<Table> {
        if selection.universe() != self.row_count() {
            return Err(Error::IncompatibleUniverse {
                left: selection.universe(),
                right: self.row_count(),
            });
        }
        Ok(self.take_selection(selection, "project"))
    }

    /// Exactly the given rows, in the given order; repeats allowed
    pub fn rows(&self, indices: &[usize]) -> Result<Table> {
        let rows = self.row_count();
        if let Some(&bad) = indices.iter().find(|&&i| i >= rows) {
            return Err(Error::OutOfRange(format!("row {} of {} rows", bad, rows)));
        }
        debug!(rows_in = rows, rows_out = indices.len(), "rows");
        Ok(self.take_rows(indices))
    }

    /// Every row except the given ones
    pub fn drop_rows(&self, indices: &[usize]) -> Result<Table> {
        let dropped = Selection::from_indices(self.row_count(), indices.iter().copied())?;
        Ok(self.take_selection(&dropped.complement(), "drop_rows"))
    }

    /// Rows `start..end`
    pub fn in_range(&self, start: usize, end: usize) -> Result<Table> {
        let mut selection = Selection::of(self.row_count());
        selection.add_range(start, end)?;
        Ok(self.take_selection(&selection, "in_range"))
    }

    /// Every row outside `start..end`
    pub fn drop_range(&self, start: usize, end: usize) -> Result<Table> {
        let mut selection = Selection::of(self.row_count());
        selection.add_range(start, end)?;
        Ok(self.take_selection(&selection.complement(), "drop_range"))
    }

    /// Leading `min(n, row_count)` rows
    pub fn first(&self, n: usize) -> Table {
        let end = n.min(self.row_count());
        self.take_rows(&(0..end).collect::<Vec<_>>())
    }

    /// Trailing `min(n, row_count)` rows
    pub fn last(&self, n: usize) -> Table {
        let rows = self.row_count();
        let start = rows - n.min(rows);
        self.take_rows(&(start..rows).collect::<Vec<_>>())
    }

    /// `n` distinct rows drawn uniformly without replacement
    pub fn sample_n(&self, n: usize) -> Result<Table> {
        self.sample_n_with(n, &SamplingConfig::default())
    }

    pub fn sample_n_with(&self, n: usize, config: &SamplingConfig) -> Result<Table> {
        let selection = self.sample_selection(n, config)?;
        Ok(self.take_selection(&selection, "sample_n"))
    }

    /// `floor(fraction * row_count)` distinct rows drawn uniformly
    pub fn sample_x(&self, fraction: f64) -> Result<Table> {
        self.sample_x_with(fraction, &SamplingConfig::default())
    }

    pub fn sample_x_with(&self, fraction: f64, config: &SamplingConfig) -> Result<Table> {
        let n = self.sample_size(fraction)?;
        self.sample_n_with(n, config)
    }

    /// `(sample, rest)`: a `sample_x(fraction)` draw and its complement
    pub fn sample_split(&self, fraction: f64) -> Result<(Table, Table)> {
        self.sample_split_with(fraction, &SamplingConfig::default())
    }

    pub fn sample_split_with(
        &self,
        fraction: f64,
        config: &SamplingConfig,
    ) -> Result<(Table, Table)> {
        let n = self.sample_size(fraction)?;
        let selection = self.sample_selection(n, config)?;
        Ok((
            self.take_selection(&selection, "sample_split"),
            self.take_selection(&selection.complement(), "sample_split"),
        ))
    }

    /// Rows where no column holds its null sentinel
    pub fn drop_rows_with_missing_values(&self) -> Result<Table> {
        let mut missing = Selection::of(self.row_count());
        for column in self.columns() {
            missing = missing.union(&column.eval_missing())?;
        }
        Ok(self.take_selection(&missing.complement(), "drop_rows_with_missing_values"))
    }

    fn sample_size(&self, fraction: f64) -> Result<usize> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidArgument(format!(
                "sample fraction {} outside [0, 1]",
                fraction
            )));
        }
        Ok((fraction * self.row_count() as f64).floor() as usize)
    }

    fn sample_selection(&self, n: usize, config: &SamplingConfig) -> Result<Selection> {
        let rows = self.row_count();
        if n > rows {
            return Err(Error::InvalidArgument(format!(
                "cannot sample {} rows from {} rows",
                n, rows
            )));
        }
        let mut rng = config.rng();
        let picked = index::sample(&mut rng, rows, n);
        Selection::from_indices(rows, picked.into_iter())
    }

    fn take_selection(&self, selection: &Selection, op: &'static str) -> Table {
        let indices = selection.to_vec();
        debug!(op, rows_in = self.row_count(), rows_out = indices.len(), "row operation");
        self.take_rows(&indices)
    }
}
