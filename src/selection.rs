//! Row selections
//!
//! A [`Selection`] is a deduplicated, ascending set of row indices bound to the
//! row count of the table it was computed against (its *universe*). Set algebra
//! is only defined between selections over the same universe.

use crate::error::{Error, Result};
use crate::table::Bitmap;

/// Ordered, deduplicated set of row indices in `[0, universe)`.
///
/// Stored as a word-packed bitmap plus a cached member count, so `size` is
/// O(1) and `contains` is a single bit probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    bits: Bitmap,
    count: usize,
}

impl Selection {
    /// Empty selection over `row_count` rows
    pub fn of(row_count: usize) -> Self {
        Selection {
            bits: Bitmap::new_all_clear(row_count),
            count: 0,
        }
    }

    /// Selection containing every row
    pub fn all(row_count: usize) -> Self {
        Selection {
            bits: Bitmap::new_all_set(row_count),
            count: row_count,
        }
    }

    /// Build from arbitrary indices; order and duplicates are irrelevant.
    pub fn from_indices<I>(row_count: usize, indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut selection = Selection::of(row_count);
        for i in indices {
            selection.add(i)?;
        }
        Ok(selection)
    }

    pub(crate) fn from_bitmap(bits: Bitmap) -> Self {
        let count = bits.count_ones();
        Selection { bits, count }
    }

    /// Row count this selection was built against
    #[inline]
    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    /// Add a row index. Re-adding a member is a no-op.
    pub fn add(&mut self, index: usize) -> Result<()> {
        if index >= self.universe() {
            return Err(Error::OutOfRange(format!(
                "row {} outside selection of {} rows",
                index,
                self.universe()
            )));
        }
        if !self.bits.get(index) {
            self.bits.set(index, true);
            self.count += 1;
        }
        Ok(())
    }

    /// Add every index in the half-open range `start..end`
    pub fn add_range(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.universe() {
            return Err(Error::OutOfRange(format!(
                "range {}..{} outside selection of {} rows",
                start,
                end,
                self.universe()
            )));
        }
        for i in start..end {
            if !self.bits.get(i) {
                self.bits.set(i, true);
                self.count += 1;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Membership test; indices outside the universe are never members.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.universe() && self.bits.get(index)
    }

    pub fn union(&self, other: &Selection) -> Result<Selection> {
        self.check_universe(other)?;
        Ok(Selection::from_bitmap(Bitmap::or(&self.bits, &other.bits)))
    }

    pub fn intersect(&self, other: &Selection) -> Result<Selection> {
        self.check_universe(other)?;
        Ok(Selection::from_bitmap(Bitmap::and(&self.bits, &other.bits)))
    }

    /// Members of `self` that are not members of `other`
    pub fn and_not(&self, other: &Selection) -> Result<Selection> {
        self.check_universe(other)?;
        Ok(Selection::from_bitmap(Bitmap::and_not(
            &self.bits,
            &other.bits,
        )))
    }

    /// Every row of the universe not in `self`
    pub fn complement(&self) -> Selection {
        Selection {
            bits: self.bits.not(),
            count: self.universe() - self.count,
        }
    }

    /// Member indices, strictly ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.count);
        out.extend(self.iter());
        out
    }

    fn check_universe(&self, other: &Selection) -> Result<()> {
        if self.universe() != other.universe() {
            return Err(Error::IncompatibleUniverse {
                left: self.universe(),
                right: other.universe(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(universe: usize, rows: &[usize]) -> Selection {
        Selection::from_indices(universe, rows.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut s = Selection::of(10);
        s.add(3).unwrap();
        s.add(3).unwrap();
        s.add(1).unwrap();
        assert_eq!(s.size(), 2);
        assert_eq!(s.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_add_out_of_range() {
        let mut s = Selection::of(4);
        assert!(matches!(s.add(4), Err(Error::OutOfRange(_))));
        assert!(s.is_empty());
    }

    #[test]
    fn test_add_range() {
        let mut s = Selection::of(8);
        s.add(2).unwrap();
        s.add_range(1, 4).unwrap();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.size(), 3);
        assert!(s.add_range(5, 9).is_err());
        assert!(s.add_range(4, 3).is_err());
    }

    #[test]
    fn test_set_algebra() {
        let a = sel(6, &[0, 2, 4]);
        let b = sel(6, &[2, 3]);

        assert_eq!(a.union(&b).unwrap().to_vec(), vec![0, 2, 3, 4]);
        assert_eq!(a.intersect(&b).unwrap().to_vec(), vec![2]);
        assert_eq!(a.and_not(&b).unwrap().to_vec(), vec![0, 4]);
        assert_eq!(a.complement().to_vec(), vec![1, 3, 5]);
        assert_eq!(a.complement().complement(), a);

        // operands untouched
        assert_eq!(a.to_vec(), vec![0, 2, 4]);
        assert_eq!(b.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_incompatible_universe() {
        let a = sel(5, &[1]);
        let b = sel(6, &[1]);
        let err = a.union(&b).unwrap_err();
        assert_eq!(err, Error::IncompatibleUniverse { left: 5, right: 6 });
        assert!(a.intersect(&b).is_err());
        assert!(a.and_not(&b).is_err());
    }

    #[test]
    fn test_contains_outside_universe() {
        let s = Selection::all(3);
        assert!(s.contains(2));
        assert!(!s.contains(3));
        assert_eq!(s.size(), 3);
        assert_eq!(Selection::of(0).complement().size(), 0);
    }
}
