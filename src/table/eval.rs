//! Column filter evaluation
//!
//! Two entry points per comparable column: against a literal operand
//! ([`Column::eval`]) and pairwise against another column
//! ([`Column::eval_column`]). Both go through the selection kernels, which
//! exclude rows holding a null sentinel on either side.

use std::cmp::Ordering;

use super::{Column, Value, NULL_BOOL, NULL_I64};
use crate::builtins::select::{select_nulls, select_pair, select_unary};
use crate::date::packed;
use crate::error::{Error, Result};
use crate::predicate::{CompareOp, DatePredicate, StrPredicate};
use crate::selection::Selection;

impl Column {
    /// Rows where `value op operand` holds.
    ///
    /// The literal must suit the column: numeric literals for F64 and I64
    /// columns, otherwise the matching type. A missing literal (Null, NaN,
    /// NULL_DATE, empty string) then selects nothing; `Value::Null` fits any
    /// column.
    ///
    /// I64 values compare exactly against F64 literals (and F64 values
    /// against I64 literals), with no rounding through `f64`.
    pub fn eval(&self, op: CompareOp, operand: &Value) -> Result<Selection> {
        if !matches!(operand, Value::Null) {
            self.check_literal(operand)?;
        }
        if operand.is_missing() {
            return Ok(Selection::of(self.len()));
        }

        let bits = match (self, operand) {
            (Column::F64(data), Value::F64(x)) => {
                select_unary(data, |v| v.is_nan(), |v| op.test(v, x))
            }
            (Column::F64(data), Value::I64(x)) => select_unary(
                data,
                |v| v.is_nan(),
                |v| op.test_ordering(cmp_i64_f64(*x, *v).map(Ordering::reverse)),
            ),
            (Column::I64(data), Value::I64(x)) => {
                select_unary(data, |v| *v == NULL_I64, |v| op.test(v, x))
            }
            (Column::I64(data), Value::F64(x)) => select_unary(
                data,
                |v| *v == NULL_I64,
                |v| op.test_ordering(cmp_i64_f64(*v, *x)),
            ),
            (Column::Date(data), Value::Date(x)) => select_unary(
                data,
                |v| packed::is_missing(*v),
                |v| op.test_packed_date(*v, *x),
            ),
            (Column::Str(data), Value::Str(x)) => {
                select_unary(data, |v| v.is_empty(), |v| op.test(v.as_str(), x.as_str()))
            }
            (Column::Bool(data), Value::Bool(x)) => {
                let x = i8::from(*x);
                select_unary(data, |v| *v == NULL_BOOL, |v| op.test(v, &x))
            }
            (_, lit) => return Err(self.literal_mismatch(lit)),
        };

        Ok(Selection::from_bitmap(bits))
    }

    fn check_literal(&self, operand: &Value) -> Result<()> {
        let fits = matches!(
            (self, operand),
            (Column::F64(_) | Column::I64(_), Value::F64(_) | Value::I64(_))
                | (Column::Date(_), Value::Date(_))
                | (Column::Str(_), Value::Str(_))
                | (Column::Bool(_), Value::Bool(_))
        );
        if fits {
            Ok(())
        } else {
            Err(self.literal_mismatch(operand))
        }
    }

    fn literal_mismatch(&self, lit: &Value) -> Error {
        let expected = match lit {
            Value::F64(_) | Value::I64(_) => "a numeric column".to_string(),
            other => match other.column_type() {
                Some(t) => format!("a {} column", t),
                None => "a typed literal".to_string(),
            },
        };
        Error::type_mismatch(expected, self.column_type())
    }

    /// Rows where `self[i] op other[i]` holds.
    ///
    /// Both columns must have the same logical type and length.
    pub fn eval_column(&self, op: CompareOp, other: &Column) -> Result<Selection> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }

        let bits = match (self, other) {
            (Column::F64(a), Column::F64(b)) => {
                select_pair(a, b, |v| v.is_nan(), |x, y| op.test(x, y))
            }
            (Column::I64(a), Column::I64(b)) => {
                select_pair(a, b, |v| *v == NULL_I64, |x, y| op.test(x, y))
            }
            (Column::Date(a), Column::Date(b)) => select_pair(
                a,
                b,
                |v| packed::is_missing(*v),
                |x, y| op.test_packed_date(*x, *y),
            ),
            (Column::Str(a), Column::Str(b)) => {
                select_pair(a, b, |v| v.is_empty(), |x, y| op.test(x, y))
            }
            (Column::Bool(a), Column::Bool(b)) => {
                select_pair(a, b, |v| *v == NULL_BOOL, |x, y| op.test(x, y))
            }
            (a, b) => {
                return Err(Error::type_mismatch(
                    a.column_type().to_string(),
                    b.column_type(),
                ))
            }
        };

        Ok(Selection::from_bitmap(bits))
    }

    /// Rows whose date satisfies a calendar predicate
    pub fn eval_date(&self, predicate: DatePredicate) -> Result<Selection> {
        let data = self.as_date_slice()?;
        let bits = select_unary(data, |v| packed::is_missing(*v), |v| predicate.test(*v));
        Ok(Selection::from_bitmap(bits))
    }

    /// Rows whose text satisfies a string predicate
    pub fn eval_str(&self, predicate: &StrPredicate) -> Result<Selection> {
        let data = self.as_str_slice()?;
        let bits = select_unary(data, |v| v.is_empty(), |v| predicate.test(v));
        Ok(Selection::from_bitmap(bits))
    }

    /// Rows holding this column's null sentinel
    pub fn eval_missing(&self) -> Selection {
        let bits = match self {
            Column::F64(data) => select_nulls(data, |v| v.is_nan()),
            Column::I64(data) => select_nulls(data, |v| *v == NULL_I64),
            Column::Date(data) => select_nulls(data, |v| packed::is_missing(*v)),
            Column::Str(data) => select_nulls(data, |v| v.is_empty()),
            Column::Bool(data) => select_nulls(data, |v| *v == NULL_BOOL),
        };
        Selection::from_bitmap(bits)
    }
}

/// Exact ordering of an integer against a float; `None` for NaN
fn cmp_i64_f64(v: i64, x: f64) -> Option<Ordering> {
    // 2^63: the first float above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if x.is_nan() {
        return None;
    }
    if x >= LIMIT {
        return Some(Ordering::Less);
    }
    if x < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = x.trunc();
    let ord = v.cmp(&(whole as i64)).then(if x > whole {
        Ordering::Less
    } else if x < whole {
        Ordering::Greater
    } else {
        Ordering::Equal
    });
    Some(ord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{pack, Month};
    use crate::table::ColumnType;

    fn dates(ymd: &[Option<(i32, u32, u32)>]) -> Column {
        Column::from_ymd(ymd).unwrap()
    }

    #[test]
    fn test_eval_numeric_literal() {
        let approval = Column::new_f64(vec![65.0, 72.0, 70.0, 68.0]);
        let lt = approval.eval(CompareOp::Lt, &Value::F64(70.0)).unwrap();
        assert_eq!(lt.to_vec(), vec![0, 3]);

        let ge = approval.eval(CompareOp::Ge, &Value::I64(70)).unwrap();
        assert_eq!(ge.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_eval_i64_against_float_literal() {
        let col = Column::new_i64(vec![1, 2, NULL_I64, 4]);
        let sel = col.eval(CompareOp::Gt, &Value::F64(1.5)).unwrap();
        assert_eq!(sel.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_eval_missing_literal_selects_nothing() {
        let col = Column::new_f64(vec![1.0, f64::NAN]);
        for lit in [Value::Null, Value::F64(f64::NAN)] {
            let sel = col.eval(CompareOp::Ne, &lit).unwrap();
            assert!(sel.is_empty());
            assert_eq!(sel.universe(), 2);
        }
    }

    #[test]
    fn test_eval_null_rows_excluded_for_every_op() {
        let col = Column::new_f64(vec![f64::NAN, 1.0]);
        for op in [
            CompareOp::Eq,
            CompareOp::Ne,
            CompareOp::Lt,
            CompareOp::Le,
            CompareOp::Gt,
            CompareOp::Ge,
        ] {
            let sel = col.eval(op, &Value::F64(1.0)).unwrap();
            assert!(!sel.contains(0), "{:?} selected a null row", op);
        }
    }

    #[test]
    fn test_eval_literal_type_mismatch() {
        let col = Column::from_strs(&["a"]);
        let err = col.eval(CompareOp::Eq, &Value::F64(1.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                found: ColumnType::Str,
                ..
            }
        ));

        let date_col = dates(&[Some((2020, 1, 1))]);
        assert!(date_col.eval(CompareOp::Eq, &Value::Bool(true)).is_err());
    }

    #[test]
    fn test_eval_missing_literal_still_type_checked() {
        let col = Column::from_strs(&["a", ""]);
        let err = col.eval(CompareOp::Eq, &Value::F64(f64::NAN)).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: "a numeric column".into(),
                found: ColumnType::Str
            }
        );

        let date_col = dates(&[Some((2020, 1, 1))]);
        assert!(date_col.eval(CompareOp::Eq, &Value::I64(NULL_I64)).is_err());
        assert!(date_col.eval(CompareOp::Eq, &Value::Str(String::new())).is_err());

        // untyped null fits any column
        assert!(col.eval(CompareOp::Eq, &Value::Null).unwrap().is_empty());
        assert!(date_col.eval(CompareOp::Eq, &Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_eval_mixed_numeric_is_exact() {
        // 2^53 + 1 has no f64 representation
        let big = Column::new_i64(vec![9_007_199_254_740_993, 9_007_199_254_740_992]);
        let eq = big.eval(CompareOp::Eq, &Value::F64(9_007_199_254_740_992.0)).unwrap();
        assert_eq!(eq.to_vec(), vec![1]);
        let gt = big.eval(CompareOp::Gt, &Value::F64(9_007_199_254_740_992.0)).unwrap();
        assert_eq!(gt.to_vec(), vec![0]);

        let edges = Column::new_i64(vec![i64::MAX, -3, -2]);
        let below = edges.eval(CompareOp::Lt, &Value::F64(9.223_372_036_854_775_808e18));
        assert_eq!(below.unwrap().to_vec(), vec![0, 1, 2]);
        let frac = edges.eval(CompareOp::Lt, &Value::F64(-2.5)).unwrap();
        assert_eq!(frac.to_vec(), vec![1]);

        let floats = Column::new_f64(vec![9_007_199_254_740_992.0, 1.5]);
        let ne = floats.eval(CompareOp::Ne, &Value::I64(9_007_199_254_740_993)).unwrap();
        assert_eq!(ne.to_vec(), vec![0, 1]);
        let ge = floats.eval(CompareOp::Ge, &Value::I64(1)).unwrap();
        assert_eq!(ge.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_eval_column_dates_before() {
        let a = dates(&[Some((2020, 1, 1)), Some((2020, 6, 1))]);
        let b = dates(&[Some((2020, 2, 1)), Some((2020, 5, 1))]);
        let sel = a.eval_column(CompareOp::Lt, &b).unwrap();
        assert_eq!(sel.to_vec(), vec![0]);
    }

    #[test]
    fn test_eval_column_excludes_null_on_either_side() {
        let a = dates(&[None, Some((2020, 1, 1)), Some((2020, 1, 1))]);
        let b = dates(&[Some((2020, 2, 1)), None, Some((2020, 2, 1))]);
        let sel = a.eval_column(CompareOp::Lt, &b).unwrap();
        assert_eq!(sel.to_vec(), vec![2]);

        let ne = a.eval_column(CompareOp::Ne, &b).unwrap();
        assert_eq!(ne.to_vec(), vec![2]);
    }

    #[test]
    fn test_eval_column_mismatches() {
        let a = Column::new_f64(vec![1.0, 2.0]);
        let short = Column::new_f64(vec![1.0]);
        assert_eq!(
            a.eval_column(CompareOp::Eq, &short).unwrap_err(),
            Error::LengthMismatch {
                expected: 2,
                found: 1
            }
        );

        let ints = Column::new_i64(vec![1, 2]);
        assert!(matches!(
            a.eval_column(CompareOp::Eq, &ints),
            Err(Error::TypeMismatch {
                found: ColumnType::I64,
                ..
            })
        ));
    }

    #[test]
    fn test_eval_date_in_april() {
        let col = dates(&[Some((2020, 4, 1)), Some((2020, 5, 1)), Some((2020, 4, 15)), None]);
        let sel = col.eval_date(DatePredicate::InMonth(Month::April)).unwrap();
        assert_eq!(sel.to_vec(), vec![0, 2]);

        let numbers = Column::new_f64(vec![1.0]);
        assert!(numbers.eval_date(DatePredicate::InLeapYear).is_err());
    }

    #[test]
    fn test_eval_str_and_missing() {
        let col = Column::from_strs(&["Local_Date", "", "Double", "LOCAL_DATE"]);
        let sel = col
            .eval_str(&StrPredicate::EqualsIgnoreCase("local_date".into()))
            .unwrap();
        assert_eq!(sel.to_vec(), vec![0, 3]);
        assert_eq!(col.eval_missing().to_vec(), vec![1]);

        let eq = col.eval(CompareOp::Eq, &Value::from("Double")).unwrap();
        assert_eq!(eq.to_vec(), vec![2]);
    }

    #[test]
    fn test_eval_bool() {
        let col = Column::new_bool(vec![Some(true), None, Some(false), Some(true)]);
        let sel = col.eval(CompareOp::Eq, &Value::Bool(true)).unwrap();
        assert_eq!(sel.to_vec(), vec![0, 3]);
        let d = pack(2020, 1, 1).unwrap();
        assert!(col.eval(CompareOp::Eq, &Value::Date(d)).is_err());
    }
}
