//! Canonical itemset representation
//!
//! An `Itemset` always stores its items sorted ascending by `ItemId` with no
//! duplicates, so equal member sets compare and hash equal regardless of how
//! they were built.
//!
//! # Canonical Order
//!
//! ```text
//! shorter itemsets first, then lexicographic on ascending item indices
//!
//! {0} < {2} < {0,1} < {0,2} < {1,2} < {0,1,2}
//! ```
//!
//! This single ordering drives Apriori join validity, deterministic output
//! sorting, and tie-breaks in the rule generator.

use super::item::ItemId;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Set of items in canonical (ascending) order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Itemset {
    items: Vec<ItemId>,
}

impl Itemset {
    /// Build from any item sequence, normalizing order and duplicates
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Build from raw column indices
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        Self::new(indices.into_iter().map(ItemId::new))
    }

    /// Single-item set
    pub fn singleton(item: ItemId) -> Self {
        Self { items: vec![item] }
    }

    /// Build from items already in strictly ascending order
    pub(crate) fn from_sorted_unchecked(items: Vec<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::new(self.iter().chain(other.iter()))
    }

    /// Items of `self` not in `other`
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted_unchecked(
            self.iter().filter(|item| !other.contains(*item)).collect(),
        )
    }

    /// Select members by position (positions must be ascending)
    pub fn select(&self, positions: &[usize]) -> Itemset {
        Itemset::from_sorted_unchecked(positions.iter().map(|&p| self.items[p]).collect())
    }

    /// Copy of `self` with the member at `position` removed
    pub fn without_position(&self, position: usize) -> Itemset {
        let mut items = self.items.clone();
        items.remove(position);
        Itemset::from_sorted_unchecked(items)
    }

    /// Apriori join: both share all but their last item and
    /// self's last item sorts before other's
    pub fn join(&self, other: &Itemset) -> Option<Itemset> {
        let k = self.len();
        if k == 0 || other.len() != k || self.items[..k - 1] != other.items[..k - 1] {
            return None;
        }
        let (a, b) = (self.items[k - 1], other.items[k - 1]);
        if a >= b {
            return None;
        }
        let mut items = self.items.clone();
        items.push(b);
        Some(Itemset::from_sorted_unchecked(items))
    }
}

impl Ord for Itemset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items
            .len()
            .cmp(&other.items.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Itemset::new(iter)
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item.value())?;
        }
        write!(f, "}}")
    }
}
