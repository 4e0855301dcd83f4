//! Frequent itemset collection - the output contract shared by both miners
//!
//! Records carry the exact transaction count next to the derived support so
//! downstream metrics never compound floating error. The collection is
//! always sorted by support descending, ties broken by canonical itemset
//! order, which makes Apriori and FP-Growth output directly comparable.

use super::itemset::Itemset;
use crate::errors::{MiningResult, SchemaError};
use crate::shared::utils::threshold::SupportThreshold;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::cmp::Ordering;

/// Tolerance for comparing supports across miners
pub const SUPPORT_EPSILON: f64 = 1e-9;

/// (Itemset, support) record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequentItemset {
    pub itemset: Itemset,

    /// Transactions containing every item of `itemset`
    pub count: u64,

    /// `count / transaction_count`
    pub support: f64,
}

/// Immutable collection of frequent itemsets
#[derive(Debug, Clone, Serialize)]
pub struct FrequentItemsets {
    records: Vec<FrequentItemset>,
    transaction_count: u64,
    min_support: f64,

    #[serde(skip)]
    index: FxHashMap<Itemset, usize>,
}

impl FrequentItemsets {
    /// Empty collection (no transactions, or nothing reached the threshold)
    pub fn empty(transaction_count: u64, min_support: f64) -> Self {
        Self {
            records: Vec::new(),
            transaction_count,
            min_support,
            index: FxHashMap::default(),
        }
    }

    /// Build from exact counts, checking them against each other
    ///
    /// Every record must reach `min_support` without exceeding
    /// `transaction_count`, and every (k-1)-subset of a k-itemset must be
    /// present with a count at least as large. Duplicate itemsets keep
    /// their first occurrence.
    ///
    /// # Errors
    /// - `ConfigError` when `min_support` is outside (0, 1]
    /// - `SchemaError::InconsistentItemset` for the first offending record
    pub fn from_counts(
        counts: impl IntoIterator<Item = (Itemset, u64)>,
        transaction_count: u64,
        min_support: f64,
    ) -> MiningResult<Self> {
        let threshold = SupportThreshold::new(min_support, transaction_count)?;
        let collection = Self::from_counts_unchecked(counts, transaction_count, min_support);

        for record in &collection.records {
            collection.check_record(record, &threshold)?;
        }
        Ok(collection)
    }

    /// Build from counts the miners have already resolved against the threshold
    pub(crate) fn from_counts_unchecked(
        counts: impl IntoIterator<Item = (Itemset, u64)>,
        transaction_count: u64,
        min_support: f64,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut records = Vec::new();
        for (itemset, count) in counts {
            if !seen.insert(itemset.clone()) {
                continue;
            }
            let support = if transaction_count == 0 {
                0.0
            } else {
                count as f64 / transaction_count as f64
            };
            records.push(FrequentItemset {
                itemset,
                count,
                support,
            });
        }

        records.sort_by(compare_records);

        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.itemset.clone(), i))
            .collect();

        Self {
            records,
            transaction_count,
            min_support,
            index,
        }
    }

    fn check_record(
        &self,
        record: &FrequentItemset,
        threshold: &SupportThreshold,
    ) -> Result<(), SchemaError> {
        let inconsistent = |reason: String| SchemaError::InconsistentItemset {
            itemset: record.itemset.to_string(),
            count: record.count,
            reason,
        };

        if record.itemset.is_empty() {
            return Err(inconsistent("empty itemset".to_string()));
        }
        if record.count > self.transaction_count {
            return Err(inconsistent(format!(
                "count exceeds {} transactions",
                self.transaction_count
            )));
        }
        if !threshold.is_frequent(record.count) {
            return Err(inconsistent(format!(
                "below min_support {} (needs count {})",
                self.min_support,
                threshold.min_count()
            )));
        }

        if record.itemset.len() > 1 {
            for position in 0..record.itemset.len() {
                let subset = record.itemset.without_position(position);
                match self.count_of(&subset) {
                    None => return Err(inconsistent(format!("subset {subset} is missing"))),
                    Some(count) if count < record.count => {
                        return Err(inconsistent(format!(
                            "subset {subset} has lower count {count}"
                        )))
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn transaction_count(&self) -> u64 {
        self.transaction_count
    }

    /// Threshold the collection was mined with
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn records(&self) -> &[FrequentItemset] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequentItemset> {
        self.records.iter()
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&FrequentItemset> {
        self.index.get(itemset).map(|&i| &self.records[i])
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.index.contains_key(itemset)
    }

    /// Exact count of a member itemset
    pub fn count_of(&self, itemset: &Itemset) -> Option<u64> {
        self.get(itemset).map(|record| record.count)
    }

    /// First `n` records in output order
    pub fn top(&self, n: usize) -> &[FrequentItemset] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of itemsets per size; index 0 holds size 1
    pub fn size_histogram(&self) -> Vec<usize> {
        let max = self.records.iter().map(|r| r.itemset.len()).max().unwrap_or(0);
        let mut histogram = vec![0; max];
        for record in &self.records {
            histogram[record.itemset.len() - 1] += 1;
        }
        histogram
    }

    /// Largest itemset size present
    pub fn max_itemset_len(&self) -> usize {
        self.records.iter().map(|r| r.itemset.len()).max().unwrap_or(0)
    }

    /// Same itemsets with supports equal within `epsilon`
    pub fn matches(&self, other: &FrequentItemsets, epsilon: f64) -> bool {
        self.len() == other.len()
            && self.records.iter().all(|record| {
                other
                    .get(&record.itemset)
                    .map_or(false, |theirs| (theirs.support - record.support).abs() <= epsilon)
            })
    }
}

impl PartialEq for FrequentItemsets {
    fn eq(&self, other: &Self) -> bool {
        self.transaction_count == other.transaction_count && self.records == other.records
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a FrequentItemset;
    type IntoIter = std::slice::Iter<'a, FrequentItemset>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Support descending, then canonical itemset order
fn compare_records(a: &FrequentItemset, b: &FrequentItemset) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.itemset.cmp(&b.itemset))
}
