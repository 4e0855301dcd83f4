//! Engine API
//!
//! The three call contracts used by reporting and orchestration layers.
//! Each runs with default options (parallel, unbounded itemset size); use
//! the miners or `MiningUseCase` directly for more control.

use crate::errors::MiningResult;
use crate::features::apriori::AprioriMiner;
use crate::features::association_rules::{AssociationRule, RuleGenerator, RuleMetric};
use crate::features::fp_growth::FpGrowthMiner;
use crate::features::miner::ItemsetMiner;
use crate::features::transactions::TransactionStore;
use crate::shared::models::FrequentItemsets;

/// Frequent itemsets by level-wise candidate generation
pub fn mine_apriori(store: &TransactionStore, min_support: f64) -> MiningResult<FrequentItemsets> {
    AprioriMiner::new().mine(store, min_support)
}

/// Frequent itemsets by prefix-tree mining
pub fn mine_fpgrowth(store: &TransactionStore, min_support: f64) -> MiningResult<FrequentItemsets> {
    FpGrowthMiner::new().mine(store, min_support)
}

/// Scored rules passing `metric >= min_threshold`, best lift first
///
/// The threshold is validated even when `itemsets` is empty.
pub fn generate_rules(
    itemsets: &FrequentItemsets,
    metric: RuleMetric,
    min_threshold: f64,
) -> MiningResult<Vec<AssociationRule>> {
    let generator = RuleGenerator::new(metric, min_threshold)?;
    Ok(generator.generate(itemsets))
}
