//! Prefix-tree Miner (FP-Growth)
//!
//! # Algorithm
//!
//! 1. Two passes over the store: item counts, then one insertion per
//!    transaction (frequent items only, global order)
//! 2. For every header item, least frequent first: emit {item} ∪ suffix,
//!    build the conditional tree from its prefix paths, and queue it
//! 3. A single-chain conditional tree is expanded directly: every subset of
//!    the chain joins the suffix
//!
//! Conditional trees are processed from an explicit work-list, so depth is
//! bounded by the item universe rather than the call stack. Top-level items
//! are independent and fan out over rayon.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::errors::MiningResult;
use crate::features::fp_growth::domain::{FpTree, WeightedPath};
use crate::features::miner::{ItemsetMiner, MinerOptions};
use crate::features::transactions::TransactionStore;
use crate::shared::models::{FrequentItemsets, ItemId, Itemset};
use crate::shared::utils::combinations::Combinations;
use crate::shared::utils::threshold::SupportThreshold;

/// Prefix-tree miner without candidate generation
#[derive(Debug, Clone, Default)]
pub struct FpGrowthMiner {
    options: MinerOptions,
}

impl FpGrowthMiner {
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

    /// Every frequent itemset whose least frequent member is the header
    /// item at `rank`
    fn mine_item(&self, tree: &FpTree, rank: usize, threshold: &SupportThreshold) -> Vec<(Itemset, u64)> {
        let entry = &tree.header()[rank];
        let suffix = vec![entry.item];
        let mut found = vec![(Itemset::singleton(entry.item), entry.count)];

        if !self.options.allows_len(2) {
            return found;
        }

        let mut work: Vec<(FpTree, Vec<ItemId>)> = Vec::new();
        let conditional = tree.conditional_tree(rank, threshold.min_count());
        if !conditional.is_empty() {
            work.push((conditional, suffix));
        }

        while let Some((tree, suffix)) = work.pop() {
            if let Some(path) = tree.single_path() {
                self.expand_path(&path, &suffix, threshold, &mut found);
                continue;
            }

            for rank in (0..tree.header().len()).rev() {
                let entry = &tree.header()[rank];
                let mut extended = suffix.clone();
                extended.push(entry.item);
                found.push((Itemset::new(extended.iter().copied()), entry.count));

                if self.options.allows_len(extended.len() + 1) {
                    let conditional = tree.conditional_tree(rank, threshold.min_count());
                    if !conditional.is_empty() {
                        work.push((conditional, extended));
                    }
                }
            }
        }

        found
    }

    /// Emit every non-empty subset of a single chain joined with `suffix`
    ///
    /// Chain counts shrink toward the leaf, so a subset's count is the count
    /// of its deepest member.
    fn expand_path(
        &self,
        path: &[(ItemId, u64)],
        suffix: &[ItemId],
        threshold: &SupportThreshold,
        found: &mut Vec<(Itemset, u64)>,
    ) {
        let room = match self.options.max_len {
            Some(max) => max.saturating_sub(suffix.len()),
            None => path.len(),
        };

        for k in 1..=room.min(path.len()) {
            for positions in Combinations::new(path.len(), k) {
                let deepest = positions[k - 1];
                let count = path[deepest].1;
                if !threshold.is_frequent(count) {
                    continue;
                }
                let items = suffix
                    .iter()
                    .copied()
                    .chain(positions.iter().map(|&p| path[p].0));
                found.push((Itemset::new(items), count));
            }
        }
    }
}

impl ItemsetMiner for FpGrowthMiner {
    fn name(&self) -> &'static str {
        "fpgrowth"
    }

    fn mine(&self, store: &TransactionStore, min_support: f64) -> MiningResult<FrequentItemsets> {
        self.options.validate()?;
        let n = store.transaction_count();
        let threshold = SupportThreshold::new(min_support, n)?;
        if store.is_empty() {
            return Ok(FrequentItemsets::empty(0, min_support));
        }

        let paths: Vec<WeightedPath> = store
            .transactions()
            .map(|row| (row.iter_ones().map(|i| ItemId::new(i as u32)).collect(), 1))
            .collect();
        let tree = FpTree::build(&paths, threshold.min_count());

        debug!(
            "fp-tree built: {} frequent items, {} nodes",
            tree.header().len(),
            tree.node_count()
        );

        let ranks = 0..tree.header().len();
        let found: Vec<(Itemset, u64)> = if self.options.use_rayon() {
            ranks
                .into_par_iter()
                .flat_map_iter(|rank| self.mine_item(&tree, rank, &threshold))
                .collect()
        } else {
            ranks
                .flat_map(|rank| self.mine_item(&tree, rank, &threshold))
                .collect()
        };

        info!(
            "fp-growth mined {} frequent itemsets from {} transactions (min_count={})",
            found.len(),
            n,
            threshold.min_count()
        );

        Ok(FrequentItemsets::from_counts_unchecked(found, n, min_support))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::apriori::AprioriMiner;

    fn grocery() -> TransactionStore {
        TransactionStore::from_baskets(
            ["milk", "bread", "eggs"],
            vec![
                vec!["milk", "bread"],
                vec!["milk", "bread", "eggs"],
                vec!["milk"],
                vec!["bread", "eggs"],
            ],
        )
        .unwrap()
    }

    fn dense() -> TransactionStore {
        let items = ["a", "b", "c", "d", "e"];
        let baskets = vec![
            vec!["a", "b", "c", "d", "e"],
            vec!["a", "b", "c", "d"],
            vec!["a", "b", "c"],
            vec!["a", "b", "d", "e"],
            vec!["b", "c", "e"],
            vec!["a", "c", "d"],
            vec!["a", "b"],
            vec!["c", "d", "e"],
        ];
        TransactionStore::from_baskets(items, baskets).unwrap()
    }

    fn set(ids: &[u32]) -> Itemset {
        Itemset::from_indices(ids.iter().copied())
    }

    #[test]
    fn test_grocery_half_support() {
        let itemsets = FpGrowthMiner::new().mine(&grocery(), 0.5).unwrap();
        let found: Vec<_> = itemsets.iter().map(|r| (r.itemset.clone(), r.count)).collect();
        assert_eq!(
            found,
            vec![
                (set(&[0]), 3),
                (set(&[1]), 3),
                (set(&[2]), 2),
                (set(&[0, 1]), 2),
                (set(&[1, 2]), 2),
            ]
        );
    }

    #[test]
    fn test_matches_apriori_on_dense_store() {
        let store = dense();
        for &s in &[0.125, 0.25, 0.375, 0.5, 0.75] {
            let fp = FpGrowthMiner::new().mine(&store, s).unwrap();
            let ap = AprioriMiner::new().mine(&store, s).unwrap();
            assert_eq!(fp, ap, "miners disagree at min_support={}", s);
        }
    }

    #[test]
    fn test_single_transaction_is_single_path() {
        let store = TransactionStore::from_baskets(["x", "y", "z"], vec![vec!["x", "y", "z"]]).unwrap();
        let itemsets = FpGrowthMiner::new().mine(&store, 1.0).unwrap();
        // all 7 non-empty subsets
        assert_eq!(itemsets.len(), 7);
        assert!(itemsets.iter().all(|r| r.count == 1));
    }

    #[test]
    fn test_max_len_respected() {
        let store = dense();
        let capped = FpGrowthMiner::new().max_len(Some(2)).mine(&store, 0.125).unwrap();
        assert!(capped.max_itemset_len() <= 2);

        let full = FpGrowthMiner::new().mine(&store, 0.125).unwrap();
        let expected = full.iter().filter(|r| r.itemset.len() <= 2).count();
        assert_eq!(capped.len(), expected);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let store = dense();
        let serial = FpGrowthMiner::new().parallel(false).mine(&store, 0.25).unwrap();
        let parallel = FpGrowthMiner::new().parallel(true).mine(&store, 0.25).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_threshold_above_every_item() {
        assert!(FpGrowthMiner::new().mine(&grocery(), 0.9).unwrap().is_empty());
    }

    #[test]
    fn test_empty_store_and_invalid_support() {
        let store = TransactionStore::from_table(["a"], &[]).unwrap();
        assert!(FpGrowthMiner::new().mine(&store, 0.3).unwrap().is_empty());
        assert!(FpGrowthMiner::new().mine(&grocery(), f64::NAN).is_err());
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let err = FpGrowthMiner::new()
            .max_len(Some(0))
            .mine(&grocery(), 0.5)
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("max_len"));
    }
}
