//! Packed date encoding
//!
//! A date is packed into one `i32` as `year << 16 | month << 8 | day`:
//! - year: signed, upper 16 bits
//! - month: 1..=12, bits 8..16
//! - day: 1..=31, bits 0..8
//!
//! Numerically the packed value is `year * 65536 + month * 256 + day`, so
//! signed integer order is chronological order. Predicates decode only the
//! field they need; no calendar object is ever built.

use super::calendar::{self, Month, Quarter, Weekday};
use crate::error::{Error, Result};

/// Null sentinel for packed dates
///
/// `i32::MIN` decodes to year -32768, month 0, which is outside the supported
/// year range, so it never collides with a real date.
pub const NULL_DATE: i32 = i32::MIN;

pub const MIN_YEAR: i32 = -32_767;
pub const MAX_YEAR: i32 = 32_767;

/// Pack a calendar date, validating year range, month and day.
pub fn pack(year: i32, month: u32, day: u32) -> Result<i32> {
    let valid = (MIN_YEAR..=MAX_YEAR).contains(&year)
        && (1..=12).contains(&month)
        && day >= 1
        && day <= calendar::days_in_month(year, month);
    if !valid {
        return Err(Error::InvalidDate { year, month, day });
    }
    Ok((year << 16) | ((month as i32) << 8) | day as i32)
}

/// Decode a packed date; `None` for the null sentinel.
pub fn unpack(packed: i32) -> Option<(i32, u32, u32)> {
    if is_missing(packed) {
        return None;
    }
    Some((year_of(packed), month_of(packed), day_of(packed)))
}

#[inline]
pub fn is_missing(packed: i32) -> bool {
    packed == NULL_DATE
}

#[inline]
fn year_of(packed: i32) -> i32 {
    packed >> 16
}

#[inline]
fn month_of(packed: i32) -> u32 {
    ((packed >> 8) & 0xFF) as u32
}

#[inline]
fn day_of(packed: i32) -> u32 {
    (packed & 0xFF) as u32
}

pub fn year(packed: i32) -> Option<i32> {
    (!is_missing(packed)).then(|| year_of(packed))
}

pub fn month(packed: i32) -> Option<Month> {
    if is_missing(packed) {
        return None;
    }
    Month::from_number(month_of(packed))
}

pub fn day_of_month(packed: i32) -> Option<u32> {
    (!is_missing(packed)).then(|| day_of(packed))
}

/// 1-based day of the year
pub fn day_of_year(packed: i32) -> Option<u32> {
    let (y, m, d) = unpack(packed)?;
    Some(calendar::ordinal(y, m, d))
}

/// Days since 1970-01-01
pub fn to_epoch_days(packed: i32) -> Option<i64> {
    let (y, m, d) = unpack(packed)?;
    Some(calendar::days_from_civil(y, m, d))
}

/// Pack the date `days` after 1970-01-01; `OutOfRange` outside
/// `MIN_YEAR-01-01..=MAX_YEAR-12-31`
pub fn from_epoch_days(days: i64) -> Result<i32> {
    let first = calendar::days_from_civil(MIN_YEAR, 1, 1);
    let last = calendar::days_from_civil(MAX_YEAR, 12, 31);
    if !(first..=last).contains(&days) {
        return Err(Error::OutOfRange(format!("{} days from epoch", days)));
    }
    let (y, m, d) = calendar::civil_from_days(days);
    let year = i32::try_from(y)
        .map_err(|_| Error::OutOfRange(format!("{} days from epoch", days)))?;
    pack(year, m, d)
}

pub fn day_of_week(packed: i32) -> Option<Weekday> {
    to_epoch_days(packed).map(Weekday::from_epoch_days)
}

// ============================================================================
// Comparisons: plain integer compares, false whenever either side is missing
// ============================================================================

#[inline]
pub fn is_less_than(a: i32, b: i32) -> bool {
    !is_missing(a) && !is_missing(b) && a < b
}

#[inline]
pub fn is_greater_than(a: i32, b: i32) -> bool {
    !is_missing(a) && !is_missing(b) && a > b
}

#[inline]
pub fn is_equal_to(a: i32, b: i32) -> bool {
    !is_missing(a) && a == b
}

#[inline]
pub fn is_on_or_before(a: i32, b: i32) -> bool {
    !is_missing(a) && !is_missing(b) && a <= b
}

#[inline]
pub fn is_on_or_after(a: i32, b: i32) -> bool {
    !is_missing(a) && !is_missing(b) && a >= b
}

// ============================================================================
// Calendar predicates
// ============================================================================

#[inline]
pub fn is_in_month(packed: i32, month: Month) -> bool {
    !is_missing(packed) && month_of(packed) == month.number()
}

#[inline]
pub fn is_in_quarter(packed: i32, quarter: Quarter) -> bool {
    !is_missing(packed) && quarter.contains_month(month_of(packed))
}

#[inline]
pub fn is_in_year(packed: i32, year: i32) -> bool {
    !is_missing(packed) && year_of(packed) == year
}

#[inline]
pub fn is_first_day_of_month(packed: i32) -> bool {
    !is_missing(packed) && day_of(packed) == 1
}

pub fn is_last_day_of_month(packed: i32) -> bool {
    !is_missing(packed)
        && day_of(packed) == calendar::days_in_month(year_of(packed), month_of(packed))
}

pub fn is_in_leap_year(packed: i32) -> bool {
    !is_missing(packed) && calendar::is_leap_year(year_of(packed))
}

pub fn is_weekend(packed: i32) -> bool {
    day_of_week(packed).is_some_and(Weekday::is_weekend)
}

pub fn is_weekday(packed: i32) -> bool {
    day_of_week(packed).is_some_and(|d| !d.is_weekend())
}

pub fn is_on_day_of_week(packed: i32, weekday: Weekday) -> bool {
    day_of_week(packed) == Some(weekday)
}
