//! Level-wise Miner (Apriori)
//!
//! # Algorithm
//!
//! 1. C_1 = all single items
//! 2. Count every candidate of C_k against the store (tid-bitset AND)
//! 3. L_k = candidates with count >= min_count
//! 4. C_{k+1} = join + prune of L_k
//! 5. Stop when L_k or C_{k+1} is empty (or k reaches max_len)
//!
//! # Performance
//! - Counting is O(|C_k| · k · n/64) per level
//! - Candidates of one level are counted independently (rayon)

use rayon::prelude::*;
use tracing::{debug, info};

use super::candidates::generate_candidates;
use crate::errors::MiningResult;
use crate::features::miner::{ItemsetMiner, MinerOptions};
use crate::features::transactions::TransactionStore;
use crate::shared::models::{FrequentItemsets, Itemset};
use crate::shared::utils::threshold::SupportThreshold;

/// Breadth-first candidate generation miner
#[derive(Debug, Clone, Default)]
pub struct AprioriMiner {
    options: MinerOptions,
}

impl AprioriMiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MinerOptions) -> Self {
        Self { options }
    }

    pub fn max_len(mut self, max_len: Option<usize>) -> Self {
        self.options.max_len = max_len;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    fn count_level(&self, store: &TransactionStore, candidates: Vec<Itemset>) -> Vec<(Itemset, u64)> {
        if self.options.use_rayon() {
            candidates
                .into_par_iter()
                .map(|candidate| {
                    let count = store.count_containing(&candidate);
                    (candidate, count)
                })
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|candidate| {
                    let count = store.count_containing(&candidate);
                    (candidate, count)
                })
                .collect()
        }
    }
}

impl ItemsetMiner for AprioriMiner {
    fn name(&self) -> &'static str {
        "apriori"
    }

    fn mine(&self, store: &TransactionStore, min_support: f64) -> MiningResult<FrequentItemsets> {
        self.options.validate()?;
        let n = store.transaction_count();
        let threshold = SupportThreshold::new(min_support, n)?;
        if store.is_empty() {
            return Ok(FrequentItemsets::empty(0, min_support));
        }

        let mut found: Vec<(Itemset, u64)> = Vec::new();
        let mut candidates: Vec<Itemset> = store.item_ids().map(Itemset::singleton).collect();
        let mut k = 1;

        while !candidates.is_empty() && self.options.allows_len(k) {
            let candidate_count = candidates.len();
            let frequent: Vec<(Itemset, u64)> = self
                .count_level(store, candidates)
                .into_iter()
                .filter(|(_, count)| threshold.is_frequent(*count))
                .collect();

            debug!(
                "apriori level {}: {} candidates, {} frequent",
                k,
                candidate_count,
                frequent.len()
            );

            if frequent.is_empty() {
                break;
            }

            let mut level: Vec<Itemset> = frequent.iter().map(|(set, _)| set.clone()).collect();
            level.sort();
            found.extend(frequent);

            candidates = generate_candidates(&level);
            k += 1;
        }

        info!(
            "apriori mined {} frequent itemsets from {} transactions (min_count={})",
            found.len(),
            n,
            threshold.min_count()
        );

        Ok(FrequentItemsets::from_counts_unchecked(found, n, min_support))
    }
}
