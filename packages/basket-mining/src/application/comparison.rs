//! Miner comparison
//!
//! Runs Apriori and FP-Growth on the same store and configuration and
//! reports counts, timings and whether both collections agree. Reporting
//! only: nothing here feeds back into mining.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{MiningConfig, ReportConfig, Validatable};
use crate::errors::MiningResult;
use crate::features::apriori::AprioriMiner;
use crate::features::association_rules::{AssociationRule, RuleGenerator};
use crate::features::fp_growth::FpGrowthMiner;
use crate::features::miner::{ItemsetMiner, MinerOptions};
use crate::features::transactions::TransactionStore;
use crate::shared::models::{FrequentItemset, FrequentItemsets, SUPPORT_EPSILON};

/// Per-miner figures
#[derive(Debug, Clone, Serialize)]
pub struct MinerSummary {
    pub algorithm: String,
    pub itemset_count: usize,
    /// Index 0 holds size 1
    pub itemsets_per_size: Vec<usize>,
    pub rule_count: usize,
    /// Rules with confidence above `ReportConfig::strong_confidence`
    pub strong_rule_count: usize,
    /// First `ReportConfig::top_n` itemsets in output order
    pub top_itemsets: Vec<FrequentItemset>,
    pub elapsed_ms: f64,
}

/// Side-by-side result of both miners
#[derive(Debug, Clone, Serialize)]
pub struct MinerComparison {
    pub min_support: f64,
    pub strong_confidence: f64,
    pub transaction_count: u64,
    pub apriori: MinerSummary,
    pub fpgrowth: MinerSummary,
    /// Same itemsets with supports within 1e-9
    pub itemsets_match: bool,
}

impl MinerComparison {
    /// apriori time / fpgrowth time (None when fpgrowth took no measurable time)
    pub fn speedup(&self) -> Option<f64> {
        if self.fpgrowth.elapsed_ms > 0.0 {
            Some(self.apriori.elapsed_ms / self.fpgrowth.elapsed_ms)
        } else {
            None
        }
    }
}

/// Run both miners with one configuration
///
/// `config.algorithm` is ignored; everything else applies to both.
/// `config.report` only shapes the summaries.
pub fn compare_miners(store: &TransactionStore, config: &MiningConfig) -> MiningResult<MinerComparison> {
    config.validate()?;
    let options = MinerOptions {
        max_len: config.max_len,
        parallel: config.parallel.enabled,
    };
    let generator = RuleGenerator::from_config(&config.rules)?.parallel(config.parallel.enabled);

    let (apriori_sets, apriori) = summarize(
        &AprioriMiner::with_options(options),
        store,
        config.min_support,
        &generator,
        &config.report,
    )?;
    let (fp_sets, fpgrowth) = summarize(
        &FpGrowthMiner::with_options(options),
        store,
        config.min_support,
        &generator,
        &config.report,
    )?;

    let itemsets_match = apriori_sets.matches(&fp_sets, SUPPORT_EPSILON);
    if itemsets_match {
        info!(
            "miners agree: {} itemsets (apriori {:.2}ms, fpgrowth {:.2}ms)",
            apriori.itemset_count, apriori.elapsed_ms, fpgrowth.elapsed_ms
        );
    } else {
        warn!(
            "miners disagree: apriori {} itemsets, fpgrowth {} itemsets",
            apriori.itemset_count, fpgrowth.itemset_count
        );
    }

    Ok(MinerComparison {
        min_support: config.min_support,
        strong_confidence: config.report.strong_confidence,
        transaction_count: store.transaction_count(),
        apriori,
        fpgrowth,
        itemsets_match,
    })
}

fn summarize(
    miner: &dyn ItemsetMiner,
    store: &TransactionStore,
    min_support: f64,
    generator: &RuleGenerator,
    report: &ReportConfig,
) -> MiningResult<(FrequentItemsets, MinerSummary)> {
    let start = Instant::now();
    let itemsets = miner.mine(store, min_support)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let rules = generator.generate(&itemsets);
    let summary = MinerSummary {
        algorithm: miner.name().to_string(),
        itemset_count: itemsets.len(),
        itemsets_per_size: itemsets.size_histogram(),
        rule_count: rules.len(),
        strong_rule_count: count_strong(&rules, report),
        top_itemsets: itemsets.top(report.top_n).to_vec(),
        elapsed_ms,
    };
    Ok((itemsets, summary))
}

fn count_strong(rules: &[AssociationRule], report: &ReportConfig) -> usize {
    rules.iter().filter(|r| report.is_strong(r.confidence)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::features::association_rules::RuleMetric;

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

    #[test]
    fn test_grocery_comparison() {
        let config = MiningConfig::preset(Preset::Balanced)
            .min_support(0.5)
            .rules(|r| r.metric(RuleMetric::Confidence).min_threshold(0.0));
        let report = compare_miners(&grocery(), &config).unwrap();

        assert!(report.itemsets_match);
        assert_eq!(report.apriori.itemset_count, 5);
        assert_eq!(report.fpgrowth.itemset_count, 5);
        assert_eq!(report.apriori.rule_count, 4);
        // all four grocery rules have confidence 2/3 or 1
        assert_eq!(report.apriori.strong_rule_count, 4);
        assert_eq!(report.apriori.algorithm, "apriori");
        assert_eq!(report.fpgrowth.algorithm, "fpgrowth");
    }

    #[test]
    fn test_strong_threshold_is_exclusive() {
        let scores = crate::features::metrics::RuleScores::from_counts(1, 2, 2, 4);
        let rule = AssociationRule::new(
            crate::shared::models::Itemset::from_indices([0]),
            crate::shared::models::Itemset::from_indices([1]),
            1,
            scores,
        );
        assert_eq!(rule.confidence, 0.5);
        assert_eq!(count_strong(&[rule.clone()], &ReportConfig::default()), 0);
        assert_eq!(count_strong(&[rule], &ReportConfig::default().strong_confidence(0.4)), 1);
    }

    #[test]
    fn test_report_settings_shape_summaries() {
        let config = MiningConfig::preset(Preset::Balanced)
            .min_support(0.5)
            .rules(|r| r.metric(RuleMetric::Confidence).min_threshold(0.0))
            .report(|r| r.strong_confidence(0.9).top_n(2));
        let report = compare_miners(&grocery(), &config).unwrap();

        assert_eq!(report.strong_confidence, 0.9);
        // only eggs => bread reaches confidence 1
        assert_eq!(report.apriori.strong_rule_count, 1);
        assert_eq!(report.fpgrowth.strong_rule_count, 1);

        let top: Vec<_> = report.apriori.top_itemsets.iter().map(|r| r.itemset.clone()).collect();
        assert_eq!(
            top,
            vec![
                crate::shared::models::Itemset::from_indices([0]),
                crate::shared::models::Itemset::from_indices([1]),
            ]
        );
        assert_eq!(report.apriori.top_itemsets, report.fpgrowth.top_itemsets);
    }

    #[test]
    fn test_invalid_report_threshold() {
        let config = MiningConfig::preset(Preset::Balanced).report(|r| r.strong_confidence(1.5));
        let err = compare_miners(&grocery(), &config).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_config() {
        let config = MiningConfig::preset(Preset::Balanced).rules(|r| r.min_threshold(-1.0));
        assert!(compare_miners(&grocery(), &config).is_err());
    }
}
