//! Fixed-width bitset
//!
//! Backs both orientations of the transaction store:
//! - row bitsets: bit i set when item i is in the transaction
//! - column bitsets: bit t set when transaction t contains the item
//!
//! Support counting is the popcount of the AND of column bitsets.

use std::fmt;

const WORD_BITS: usize = 64;

/// Fixed-width set of bit positions `0..len`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    /// All-zero bitset of width `len`
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Bitset of width `len` with the given positions set
    pub fn from_positions(len: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::with_len(len);
        for position in positions {
            set.insert(position);
        }
        set
    }

    /// Width in bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Set bit `position`
    ///
    /// # Panics
    /// If `position >= len`.
    pub fn insert(&mut self, position: usize) {
        assert!(position < self.len, "bit {} out of range 0..{}", position, self.len);
        self.words[position / WORD_BITS] |= 1 << (position % WORD_BITS);
    }

    pub fn contains(&self, position: usize) -> bool {
        position < self.len && (self.words[position / WORD_BITS] >> (position % WORD_BITS)) & 1 != 0
    }

    /// Number of set bits
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// In-place intersection
    pub fn intersect_with(&mut self, other: &BitSet) {
        debug_assert_eq!(self.len, other.len);
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine &= theirs;
        }
    }

    /// Ascending iterator over set positions
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_ones()).finish()
    }
}
