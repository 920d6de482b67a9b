//! Dates as packed integers
//!
//! Date columns store [`packed`] `i32` values; every comparison and calendar
//! predicate runs on that integer form directly.

pub mod calendar;
pub mod packed;

pub use calendar::{days_in_month, is_leap_year, Month, Quarter, Weekday};
pub use packed::{pack, unpack, MAX_YEAR, MIN_YEAR, NULL_DATE};
