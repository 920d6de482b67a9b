//! Stateless predicates
//!
//! Plain enums dispatched per value; no shared predicate objects.

use std::cmp::Ordering;

use crate::date::packed;
use crate::date::{Month, Quarter, Weekday};

/// Binary comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    #[inline]
    pub fn test<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            CompareOp::Eq => a == b,
            CompareOp::Ne => a != b,
            CompareOp::Lt => a < b,
            CompareOp::Le => a <= b,
            CompareOp::Gt => a > b,
            CompareOp::Ge => a >= b,
        }
    }

    /// Compare two packed dates; false if either is NULL_DATE
    #[inline]
    pub fn test_packed_date(self, a: i32, b: i32) -> bool {
        match self {
            CompareOp::Eq => packed::is_equal_to(a, b),
            CompareOp::Ne => !packed::is_missing(a) && !packed::is_missing(b) && a != b,
            CompareOp::Lt => packed::is_less_than(a, b),
            CompareOp::Le => packed::is_on_or_before(a, b),
            CompareOp::Gt => packed::is_greater_than(a, b),
            CompareOp::Ge => packed::is_on_or_after(a, b),
        }
    }

    /// Whether an already computed ordering of `a` against `b` satisfies
    /// `a op b`; `None` (unordered) never does
    pub fn test_ordering(self, ord: Option<Ordering>) -> bool {
        let Some(ord) = ord else { return false };
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Ne => ord != Ordering::Equal,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Le => ord != Ordering::Greater,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Ge => ord != Ordering::Less,
        }
    }

    /// Operator with operands swapped (`a op b` == `b op.flip() a`)
    pub fn flip(self) -> CompareOp {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            op => op,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// Calendar predicate on a packed date
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatePredicate {
    InMonth(Month),
    InQuarter(Quarter),
    InYear(i32),
    FirstDayOfMonth,
    LastDayOfMonth,
    OnWeekend,
    OnWeekday,
    OnDayOfWeek(Weekday),
    InLeapYear,
}

impl DatePredicate {
    #[inline]
    pub fn test(self, date: i32) -> bool {
        match self {
            DatePredicate::InMonth(m) => packed::is_in_month(date, m),
            DatePredicate::InQuarter(q) => packed::is_in_quarter(date, q),
            DatePredicate::InYear(y) => packed::is_in_year(date, y),
            DatePredicate::FirstDayOfMonth => packed::is_first_day_of_month(date),
            DatePredicate::LastDayOfMonth => packed::is_last_day_of_month(date),
            DatePredicate::OnWeekend => packed::is_weekend(date),
            DatePredicate::OnWeekday => packed::is_weekday(date),
            DatePredicate::OnDayOfWeek(d) => packed::is_on_day_of_week(date, d),
            DatePredicate::InLeapYear => packed::is_in_leap_year(date),
        }
    }
}

/// Text predicate with a literal operand
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrPredicate {
    EqualsIgnoreCase(String),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    IsIn(Vec<String>),
}

impl StrPredicate {
    pub fn test(&self, s: &str) -> bool {
        match self {
            StrPredicate::EqualsIgnoreCase(other) => s
                .chars()
                .flat_map(char::to_lowercase)
                .eq(other.chars().flat_map(char::to_lowercase)),
            StrPredicate::StartsWith(prefix) => s.starts_with(prefix.as_str()),
            StrPredicate::EndsWith(suffix) => s.ends_with(suffix.as_str()),
            StrPredicate::Contains(needle) => s.contains(needle.as_str()),
            StrPredicate::IsIn(values) => values.iter().any(|v| v == s),
        }
    }
}
