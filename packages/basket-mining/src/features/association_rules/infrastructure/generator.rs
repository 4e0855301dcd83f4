//! Rule Generator
//!
//! # Algorithm
//!
//! For every frequent Z with |Z| >= 2 and every non-empty proper subset A:
//! B = Z \ A, score A ⇒ B from the exact counts of Z, A and B, keep the rule
//! when the chosen metric reaches the threshold. Splits whose A or B is not
//! in the collection are skipped.
//!
//! Subsets are enumerated by position, 2^|Z| - 2 per itemset, untruncated.
//!
//! # Output order
//! lift desc → confidence desc → antecedent (canonical) → consequent (canonical)

use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::config::error::ConfigResult;
use crate::config::RuleConfig;
use crate::features::association_rules::domain::{AssociationRule, RuleMetric};
use crate::features::metrics::RuleScores;
use crate::shared::models::{FrequentItemset, FrequentItemsets};
use crate::shared::utils::combinations::proper_subsets;

/// Derives scored rules from a frequent-itemset collection
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    metric: RuleMetric,
    min_threshold: f64,
    parallel: bool,
}

impl RuleGenerator {
    /// # Errors
    /// `ConfigError` when `min_threshold` is outside the metric's domain
    pub fn new(metric: RuleMetric, min_threshold: f64) -> ConfigResult<Self> {
        metric.validate_threshold(min_threshold)?;
        Ok(Self {
            metric,
            min_threshold,
            parallel: true,
        })
    }

    pub fn from_config(config: &RuleConfig) -> ConfigResult<Self> {
        Self::new(config.metric, config.min_threshold)
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn metric(&self) -> RuleMetric {
        self.metric
    }

    pub fn min_threshold(&self) -> f64 {
        self.min_threshold
    }

    /// Generate and sort all rules passing the threshold
    ///
    /// An empty collection yields no rules.
    pub fn generate(&self, itemsets: &FrequentItemsets) -> Vec<AssociationRule> {
        let sources: Vec<&FrequentItemset> = itemsets.iter().filter(|r| r.itemset.len() >= 2).collect();

        let mut rules: Vec<AssociationRule> = if cfg!(feature = "parallel") && self.parallel {
            sources
                .par_iter()
                .flat_map_iter(|record| self.rules_for(record, itemsets))
                .collect()
        } else {
            sources
                .iter()
                .flat_map(|record| self.rules_for(record, itemsets))
                .collect()
        };

        rules.sort_by(compare_rules);

        info!(
            "generated {} rules from {} itemsets ({} >= {})",
            rules.len(),
            sources.len(),
            self.metric,
            self.min_threshold
        );

        rules
    }

    fn rules_for(&self, record: &FrequentItemset, itemsets: &FrequentItemsets) -> Vec<AssociationRule> {
        let z = &record.itemset;
        let n = itemsets.transaction_count();
        let mut rules = Vec::new();
        let mut skipped = 0usize;

        for positions in proper_subsets(z.len()) {
            let antecedent = z.select(&positions);
            let consequent = z.difference(&antecedent);

            let (Some(count_a), Some(count_b)) =
                (itemsets.count_of(&antecedent), itemsets.count_of(&consequent))
            else {
                skipped += 1;
                continue;
            };

            let scores = RuleScores::from_counts(record.count, count_a, count_b, n);
            if self.metric.value(&scores) >= self.min_threshold {
                rules.push(AssociationRule::new(antecedent, consequent, record.count, scores));
            }
        }

        if skipped > 0 {
            debug!("{}: skipped {} splits with a missing side", z, skipped);
        }

        rules
    }
}

/// Output order of rules
pub fn compare_rules(a: &AssociationRule, b: &AssociationRule) -> Ordering {
    b.lift
        .total_cmp(&a.lift)
        .then_with(|| b.confidence.total_cmp(&a.confidence))
        .then_with(|| a.antecedent.cmp(&b.antecedent))
        .then_with(|| a.consequent.cmp(&b.consequent))
}
