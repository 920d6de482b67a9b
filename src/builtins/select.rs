//! Selection kernels
//!
//! Build a row bitmap 64 rows at a time: each word is assembled in a
//! register and written once. The null policy lives here, not in callers:
//! a row whose operand (either operand, for pairwise kernels) is the type's
//! null sentinel is never selected.

use crate::table::Bitmap;

/// Elementwise: select rows where `pred(x)` holds
pub fn select_unary<T, N, P>(data: &[T], is_null: N, pred: P) -> Bitmap
where
    N: Fn(&T) -> bool,
    P: Fn(&T) -> bool,
{
    let n = data.len();
    let mut words = Vec::with_capacity((n + 63) / 64);

    for chunk in data.chunks(64) {
        let mut word = 0u64;
        for (b, x) in chunk.iter().enumerate() {
            if !is_null(x) && pred(x) {
                word |= 1u64 << b;
            }
        }
        words.push(word);
    }

    Bitmap::from_words(words, n)
}

/// Pairwise: select rows where `pred(a[i], b[i])` holds
pub fn select_pair<T, N, P>(a: &[T], b: &[T], is_null: N, pred: P) -> Bitmap
where
    N: Fn(&T) -> bool,
    P: Fn(&T, &T) -> bool,
{
    let n = a.len();
    assert_eq!(b.len(), n);
    let mut words = Vec::with_capacity((n + 63) / 64);

    for (ca, cb) in a.chunks(64).zip(b.chunks(64)) {
        let mut word = 0u64;
        for (bit, (x, y)) in ca.iter().zip(cb).enumerate() {
            if !is_null(x) && !is_null(y) && pred(x, y) {
                word |= 1u64 << bit;
            }
        }
        words.push(word);
    }

    Bitmap::from_words(words, n)
}

/// Select rows holding the null sentinel
pub fn select_nulls<T, N>(data: &[T], is_null: N) -> Bitmap
where
    N: Fn(&T) -> bool,
{
    let n = data.len();
    let mut words = Vec::with_capacity((n + 63) / 64);

    for chunk in data.chunks(64) {
        let mut word = 0u64;
        for (b, x) in chunk.iter().enumerate() {
            if is_null(x) {
                word |= 1u64 << b;
            }
        }
        words.push(word);
    }

    Bitmap::from_words(words, n)
}
