//! Query helpers
//!
//! Typed handles for building filters fluently, plus combinators:
//!
//! ```
//! use colsift::query::{both, date_column, number_column};
//!
//! let filter = both(
//!     date_column("date").is_in_april(),
//!     number_column("approval").is_greater_than(70.0),
//! );
//! ```
//!
//! Nothing is evaluated here; the handles only assemble [`Filter`] values.

use super::{ColumnRef, Filter, Operand};
use crate::date::{Month, Quarter, Weekday};
use crate::predicate::{CompareOp, DatePredicate, StrPredicate};
use crate::table::Value;

pub fn both(a: Filter, b: Filter) -> Filter {
    a.and(b)
}

pub fn either(a: Filter, b: Filter) -> Filter {
    a.or(b)
}

pub fn not(filter: Filter) -> Filter {
    filter.negate()
}

/// Conjunction of every filter; `None` when given none
pub fn all_of(filters: impl IntoIterator<Item = Filter>) -> Option<Filter> {
    filters.into_iter().reduce(Filter::and)
}

/// Disjunction of every filter; `None` when given none
pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Option<Filter> {
    filters.into_iter().reduce(Filter::or)
}

pub fn number_column(column: impl Into<ColumnRef>) -> NumberColumnRef {
    NumberColumnRef {
        column: column.into(),
    }
}

pub fn date_column(column: impl Into<ColumnRef>) -> DateColumnRef {
    DateColumnRef {
        column: column.into(),
    }
}

pub fn string_column(column: impl Into<ColumnRef>) -> StringColumnRef {
    StringColumnRef {
        column: column.into(),
    }
}

pub fn boolean_column(column: impl Into<ColumnRef>) -> BooleanColumnRef {
    BooleanColumnRef {
        column: column.into(),
    }
}

fn literal(column: &ColumnRef, op: CompareOp, value: Value) -> Filter {
    Filter::Compare {
        column: column.clone(),
        op,
        operand: Operand::Literal(value),
    }
}

fn paired(column: &ColumnRef, op: CompareOp, other: impl Into<ColumnRef>) -> Filter {
    Filter::Compare {
        column: column.clone(),
        op,
        operand: Operand::Column(other.into()),
    }
}

fn missing(column: &ColumnRef) -> Filter {
    Filter::Missing {
        column: column.clone(),
    }
}

/// Filters over an F64 or I64 column
#[derive(Clone, Debug)]
pub struct NumberColumnRef {
    column: ColumnRef,
}

impl NumberColumnRef {
    pub fn is_equal_to(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Eq, Value::F64(value))
    }

    pub fn is_not_equal_to(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Ne, Value::F64(value))
    }

    pub fn is_less_than(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Lt, Value::F64(value))
    }

    pub fn is_less_than_or_equal_to(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Le, Value::F64(value))
    }

    pub fn is_greater_than(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Gt, Value::F64(value))
    }

    pub fn is_greater_than_or_equal_to(&self, value: f64) -> Filter {
        literal(&self.column, CompareOp::Ge, Value::F64(value))
    }

    /// `low <= value <= high`
    pub fn is_between_inclusive(&self, low: f64, high: f64) -> Filter {
        both(
            self.is_greater_than_or_equal_to(low),
            self.is_less_than_or_equal_to(high),
        )
    }

    pub fn is_equal_to_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Eq, other)
    }

    pub fn is_less_than_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Lt, other)
    }

    pub fn is_greater_than_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Gt, other)
    }

    pub fn is_missing(&self) -> Filter {
        missing(&self.column)
    }

    pub fn is_not_missing(&self) -> Filter {
        not(missing(&self.column))
    }
}

/// Filters over a packed Date column; literals are packed dates
/// (see [`crate::date::pack`])
#[derive(Clone, Debug)]
pub struct DateColumnRef {
    column: ColumnRef,
}

impl DateColumnRef {
    fn calendar(&self, predicate: DatePredicate) -> Filter {
        Filter::Date {
            column: self.column.clone(),
            predicate,
        }
    }

    pub fn is_before(&self, date: i32) -> Filter {
        literal(&self.column, CompareOp::Lt, Value::Date(date))
    }

    pub fn is_after(&self, date: i32) -> Filter {
        literal(&self.column, CompareOp::Gt, Value::Date(date))
    }

    pub fn is_on(&self, date: i32) -> Filter {
        literal(&self.column, CompareOp::Eq, Value::Date(date))
    }

    pub fn is_on_or_before(&self, date: i32) -> Filter {
        literal(&self.column, CompareOp::Le, Value::Date(date))
    }

    pub fn is_on_or_after(&self, date: i32) -> Filter {
        literal(&self.column, CompareOp::Ge, Value::Date(date))
    }

    /// Row by row: this column's date is strictly before `other`'s
    pub fn is_before_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Lt, other)
    }

    pub fn is_after_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Gt, other)
    }

    pub fn is_on_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Eq, other)
    }

    pub fn is_in_month(&self, month: Month) -> Filter {
        self.calendar(DatePredicate::InMonth(month))
    }

    pub fn is_in_quarter(&self, quarter: Quarter) -> Filter {
        self.calendar(DatePredicate::InQuarter(quarter))
    }

    pub fn is_in_year(&self, year: i32) -> Filter {
        self.calendar(DatePredicate::InYear(year))
    }

    pub fn is_first_day_of_month(&self) -> Filter {
        self.calendar(DatePredicate::FirstDayOfMonth)
    }

    pub fn is_last_day_of_month(&self) -> Filter {
        self.calendar(DatePredicate::LastDayOfMonth)
    }

    pub fn is_weekend(&self) -> Filter {
        self.calendar(DatePredicate::OnWeekend)
    }

    pub fn is_weekday(&self) -> Filter {
        self.calendar(DatePredicate::OnWeekday)
    }

    pub fn is_on_day_of_week(&self, weekday: Weekday) -> Filter {
        self.calendar(DatePredicate::OnDayOfWeek(weekday))
    }

    pub fn is_in_leap_year(&self) -> Filter {
        self.calendar(DatePredicate::InLeapYear)
    }

    pub fn is_missing(&self) -> Filter {
        missing(&self.column)
    }

    pub fn is_not_missing(&self) -> Filter {
        not(missing(&self.column))
    }
}

macro_rules! month_filters {
    ($($method:ident => $month:ident),* $(,)?) => {
        impl DateColumnRef {
            $(
                pub fn $method(&self) -> Filter {
                    self.is_in_month(Month::$month)
                }
            )*
        }
    };
}

month_filters!(
    is_in_january => January,
    is_in_february => February,
    is_in_march => March,
    is_in_april => April,
    is_in_may => May,
    is_in_june => June,
    is_in_july => July,
    is_in_august => August,
    is_in_september => September,
    is_in_october => October,
    is_in_november => November,
    is_in_december => December,
);

/// Filters over a Str column
#[derive(Clone, Debug)]
pub struct StringColumnRef {
    column: ColumnRef,
}

impl StringColumnRef {
    fn text(&self, predicate: StrPredicate) -> Filter {
        Filter::Text {
            column: self.column.clone(),
            predicate,
        }
    }

    pub fn is_equal_to(&self, value: &str) -> Filter {
        literal(&self.column, CompareOp::Eq, Value::from(value))
    }

    pub fn is_not_equal_to(&self, value: &str) -> Filter {
        literal(&self.column, CompareOp::Ne, Value::from(value))
    }

    pub fn equals_ignore_case(&self, value: &str) -> Filter {
        self.text(StrPredicate::EqualsIgnoreCase(value.to_string()))
    }

    pub fn starts_with(&self, prefix: &str) -> Filter {
        self.text(StrPredicate::StartsWith(prefix.to_string()))
    }

    pub fn ends_with(&self, suffix: &str) -> Filter {
        self.text(StrPredicate::EndsWith(suffix.to_string()))
    }

    pub fn contains_string(&self, needle: &str) -> Filter {
        self.text(StrPredicate::Contains(needle.to_string()))
    }

    pub fn is_in(&self, values: &[&str]) -> Filter {
        self.text(StrPredicate::IsIn(
            values.iter().map(|v| v.to_string()).collect(),
        ))
    }

    pub fn is_equal_to_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Eq, other)
    }

    pub fn is_missing(&self) -> Filter {
        missing(&self.column)
    }

    pub fn is_not_missing(&self) -> Filter {
        not(missing(&self.column))
    }
}

/// Filters over a Bool column
#[derive(Clone, Debug)]
pub struct BooleanColumnRef {
    column: ColumnRef,
}

impl BooleanColumnRef {
    pub fn is_true(&self) -> Filter {
        literal(&self.column, CompareOp::Eq, Value::Bool(true))
    }

    pub fn is_false(&self) -> Filter {
        literal(&self.column, CompareOp::Eq, Value::Bool(false))
    }

    pub fn is_equal_to_column(&self, other: impl Into<ColumnRef>) -> Filter {
        paired(&self.column, CompareOp::Eq, other)
    }

    pub fn is_missing(&self) -> Filter {
        missing(&self.column)
    }

    pub fn is_not_missing(&self) -> Filter {
        not(missing(&self.column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::pack;
    use crate::table::{Column, Table};

    fn table() -> Table {
        Table::from_columns([
            (
                "date",
                Column::from_ymd(&[
                    Some((2020, 4, 1)),
                    Some((2020, 5, 1)),
                    Some((2020, 4, 15)),
                    None,
                ])
                .unwrap(),
            ),
            ("approval", Column::new_f64(vec![65.0, 72.0, 70.0, f64::NAN])),
            ("who", Column::from_strs(&["fox", "gallup", "Fox", ""])),
            (
                "flag",
                Column::new_bool(vec![Some(true), Some(false), None, Some(true)]),
            ),
        ])
        .unwrap()
    }

    fn rows(filter: Filter) -> Vec<usize> {
        filter.apply(&table()).unwrap().to_vec()
    }

    #[test]
    fn test_number_handles() {
        let approval = number_column("approval");
        assert_eq!(rows(approval.is_less_than(70.0)), vec![0]);
        assert_eq!(rows(approval.is_greater_than_or_equal_to(70.0)), vec![1, 2]);
        assert_eq!(rows(approval.is_between_inclusive(65.0, 70.0)), vec![0, 2]);
        assert_eq!(rows(approval.is_not_equal_to(72.0)), vec![0, 2]);
        assert_eq!(rows(approval.is_missing()), vec![3]);
        assert_eq!(rows(approval.is_not_missing()), vec![0, 1, 2]);
    }

    #[test]
    fn test_date_handles() {
        let date = date_column("date");
        assert_eq!(rows(date.is_in_april()), vec![0, 2]);
        assert_eq!(rows(date.is_in_may()), vec![1]);
        assert_eq!(rows(date.is_in_quarter(Quarter::Q2)), vec![0, 1, 2]);
        assert_eq!(rows(date.is_first_day_of_month()), vec![0, 1]);
        assert_eq!(rows(date.is_before(pack(2020, 4, 15).unwrap())), vec![0]);
        assert_eq!(rows(date.is_on_or_after(pack(2020, 4, 15).unwrap())), vec![1, 2]);
        assert_eq!(rows(date.is_missing()), vec![3]);
        // 2020-04-01 Wed, 2020-05-01 Fri, 2020-04-15 Wed
        assert_eq!(rows(date.is_on_day_of_week(Weekday::Wednesday)), vec![0, 2]);
        assert!(rows(date.is_weekend()).is_empty());
    }

    #[test]
    fn test_date_before_column() {
        let other = Column::from_ymd(&[
            Some((2020, 5, 1)),
            Some((2020, 4, 1)),
            Some((2020, 4, 16)),
            Some((2020, 4, 16)),
        ])
        .unwrap();
        assert_eq!(rows(date_column("date").is_before_column(other)), vec![0, 2]);
        assert_eq!(rows(date_column("date").is_on_column("date")), vec![0, 1, 2]);
    }

    #[test]
    fn test_string_handles() {
        let who = string_column("who");
        assert_eq!(rows(who.equals_ignore_case("FOX")), vec![0, 2]);
        assert_eq!(rows(who.is_equal_to("fox")), vec![0]);
        assert_eq!(rows(who.is_not_equal_to("fox")), vec![1, 2]);
        assert_eq!(rows(who.starts_with("gal")), vec![1]);
        assert_eq!(rows(who.is_in(&["Fox", "gallup"])), vec![1, 2]);
        assert_eq!(rows(who.is_missing()), vec![3]);
    }

    #[test]
    fn test_boolean_handles() {
        let flag = boolean_column("flag");
        assert_eq!(rows(flag.is_true()), vec![0, 3]);
        assert_eq!(rows(flag.is_false()), vec![1]);
        assert_eq!(rows(flag.is_not_missing()), vec![0, 1, 3]);
    }

    #[test]
    fn test_all_of_any_of() {
        let approval = number_column("approval");
        let all = all_of([
            approval.is_greater_than(60.0),
            approval.is_less_than(71.0),
            date_column("date").is_in_april(),
        ])
        .unwrap();
        assert_eq!(rows(all), vec![0, 2]);

        let any = any_of([approval.is_missing(), approval.is_equal_to(72.0)]).unwrap();
        assert_eq!(rows(any), vec![1, 3]);

        assert!(all_of(Vec::<Filter>::new()).is_none());
        assert!(any_of(Vec::<Filter>::new()).is_none());
    }
}
