//! colsift: row selection over an in-memory columnar table
//!
//! Typed columns carry kdb-style embedded null sentinels. Filters evaluate
//! word-at-a-time into a [`Selection`] bitmap; row operations turn a
//! selection (or explicit indices, ranges, random draws) into a new table.
//!
//! ```
//! use colsift::query::{both, date_column, number_column};
//! use colsift::{Column, Table};
//!
//! let table = Table::from_columns([
//!     ("date", Column::from_ymd(&[Some((2004, 4, 2)), Some((2004, 5, 7))]).unwrap()),
//!     ("approval", Column::new_f64(vec![52.0, 48.0])),
//! ])
//! .unwrap();
//!
//! let april_highs = both(
//!     date_column("date").is_in_april(),
//!     number_column("approval").is_greater_than(50.0),
//! );
//! assert_eq!(table.select_where(&april_highs).unwrap().row_count(), 1);
//! ```

pub mod builtins;
pub mod config;
pub mod date;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod selection;
pub mod table;

pub use config::SamplingConfig;
pub use error::{Error, Result};
pub use filter::query;
pub use filter::{ColumnRef, Filter, Operand};
pub use predicate::{CompareOp, DatePredicate, StrPredicate};
pub use selection::Selection;
pub use table::{Column, ColumnType, Table, Value, NULL_BOOL, NULL_DATE, NULL_I64};
