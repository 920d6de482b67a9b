//! Bit-packed row mask (1 bit per row)
//!
//! Backing store for [`Selection`](crate::Selection):
//! - 1 = row selected, 0 = row not selected
//! - bits past `len` in the last word are always 0

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Each u64 holds 64 row bits (LSB = bit 0)
    bits: Vec<u64>,
    /// Total number of rows (not words)
    len: usize,
}

impl Bitmap {
    /// Create bitmap with every bit set
    pub fn new_all_set(len: usize) -> Self {
        let words = (len + 63) / 64;
        let mut bits = vec![!0u64; words];

        // Mask off unused bits in last word
        let rem = len % 64;
        if rem != 0 {
            bits[words - 1] = (1u64 << rem) - 1;
        }

        Self { bits, len }
    }

    /// Create bitmap with every bit clear
    pub fn new_all_clear(len: usize) -> Self {
        let words = (len + 63) / 64;
        Self {
            bits: vec![0u64; words],
            len,
        }
    }

    /// Rebuild from raw words; bits past `len` must already be clear
    pub(crate) fn from_words(bits: Vec<u64>, len: usize) -> Self {
        debug_assert_eq!(bits.len(), (len + 63) / 64);
        Self { bits, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get bit at index i
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        let w = i >> 6; // word index (i / 64)
        let b = i & 63; // bit index (i % 64)
        (self.bits[w] >> b) & 1 == 1
    }

    /// Set bit at index i
    #[inline]
    pub fn set(&mut self, i: usize, v: bool) {
        debug_assert!(i < self.len);
        let w = i >> 6;
        let b = i & 63;
        let mask = 1u64 << b;
        if v {
            self.bits[w] |= mask;
        } else {
            self.bits[w] &= !mask;
        }
    }

    /// Get raw word at word index (for fast iteration)
    #[inline]
    pub fn word(&self, w: usize) -> u64 {
        self.bits[w]
    }

    /// Number of u64 words
    #[inline]
    pub fn words_len(&self) -> usize {
        self.bits.len()
    }

    /// Population count over all words
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Bitwise AND: a & b
    pub fn and(a: &Bitmap, b: &Bitmap) -> Bitmap {
        assert_eq!(a.len, b.len);
        let bits = a.bits.iter().zip(&b.bits).map(|(x, y)| x & y).collect();
        Bitmap { bits, len: a.len }
    }

    /// Bitwise OR: a | b
    pub fn or(a: &Bitmap, b: &Bitmap) -> Bitmap {
        assert_eq!(a.len, b.len);
        let bits = a.bits.iter().zip(&b.bits).map(|(x, y)| x | y).collect();
        Bitmap { bits, len: a.len }
    }

    /// Bitwise AND-NOT: a & !b
    pub fn and_not(a: &Bitmap, b: &Bitmap) -> Bitmap {
        assert_eq!(a.len, b.len);
        let bits = a.bits.iter().zip(&b.bits).map(|(x, y)| x & !y).collect();
        Bitmap { bits, len: a.len }
    }

    /// Bitwise NOT, keeping the tail of the last word clear
    pub fn not(&self) -> Bitmap {
        let mut bits: Vec<u64> = self.bits.iter().map(|w| !w).collect();
        let rem = self.len % 64;
        if rem != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
        Bitmap {
            bits,
            len: self.len,
        }
    }

    /// Indices of set bits, ascending
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(w, &word)| {
            let mut word = word;
            std::iter::from_fn(move || {
                if word == 0 {
                    return None;
                }
                let b = word.trailing_zeros() as usize;
                word &= word - 1; // clear lowest set bit
                Some((w << 6) + b)
            })
        })
    }
}
