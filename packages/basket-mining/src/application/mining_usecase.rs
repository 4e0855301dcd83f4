//! Mining UseCase
//!
//! One configured pass: validate config → mine → generate rules → stats.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Algorithm, MiningConfig, Validatable};
use crate::errors::MiningResult;
use crate::features::apriori::AprioriMiner;
use crate::features::association_rules::{AssociationRule, RuleGenerator};
use crate::features::fp_growth::FpGrowthMiner;
use crate::features::miner::{ItemsetMiner, MinerOptions};
use crate::features::transactions::TransactionStore;
use crate::shared::models::FrequentItemsets;

/// Input for a mining pass
pub struct MiningInput<'a> {
    pub store: &'a TransactionStore,
    pub config: &'a MiningConfig,
}

/// Output of a mining pass
#[derive(Debug, Clone, Serialize)]
pub struct MiningOutput {
    pub itemsets: FrequentItemsets,
    pub rules: Vec<AssociationRule>,
    pub stats: MiningStats,
}

/// Mining statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct MiningStats {
    pub algorithm: String,
    pub transaction_count: u64,
    pub item_count: usize,
    pub itemset_count: usize,
    /// Index k holds the number of frequent itemsets of size k + 1
    pub itemsets_per_size: Vec<usize>,
    pub rule_count: usize,
    pub workers: usize,
    pub mining_time_ms: u64,
    pub rule_time_ms: u64,
    pub execution_time_ms: u64,
}

/// Build the miner a configuration selects
pub fn miner_for(config: &MiningConfig) -> Box<dyn ItemsetMiner> {
    let options = MinerOptions {
        max_len: config.max_len,
        parallel: config.parallel.enabled,
    };
    match config.algorithm {
        Algorithm::Apriori => Box::new(AprioriMiner::with_options(options)),
        Algorithm::FpGrowth => Box::new(FpGrowthMiner::with_options(options)),
    }
}

/// Mining UseCase Trait
pub trait MiningUseCase: Send + Sync {
    /// Mine frequent itemsets and rules for one store
    ///
    /// # Errors
    /// `ConfigError` when the configuration fails validation.
    fn run(&self, input: MiningInput<'_>) -> MiningResult<MiningOutput>;
}

/// Mining UseCase Implementation
#[derive(Debug, Default)]
pub struct MiningUseCaseImpl;

impl MiningUseCaseImpl {
    pub fn new() -> Self {
        Self
    }

    fn run_inner(&self, input: &MiningInput<'_>, workers: usize) -> MiningResult<MiningOutput> {
        let start = Instant::now();
        let config = input.config;

        let miner = miner_for(config);
        let itemsets = miner.mine(input.store, config.min_support)?;
        let mining_time_ms = start.elapsed().as_millis() as u64;

        let rule_start = Instant::now();
        let rules = RuleGenerator::from_config(&config.rules)?
            .parallel(config.parallel.enabled)
            .generate(&itemsets);
        let rule_time_ms = rule_start.elapsed().as_millis() as u64;

        let stats = MiningStats {
            algorithm: miner.name().to_string(),
            transaction_count: input.store.transaction_count(),
            item_count: input.store.item_count(),
            itemset_count: itemsets.len(),
            itemsets_per_size: itemsets.size_histogram(),
            rule_count: rules.len(),
            workers,
            mining_time_ms,
            rule_time_ms,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "{} pass: {} itemsets, {} rules in {}ms",
            stats.algorithm, stats.itemset_count, stats.rule_count, stats.execution_time_ms
        );

        Ok(MiningOutput {
            itemsets,
            rules,
            stats,
        })
    }
}

impl MiningUseCase for MiningUseCaseImpl {
    fn run(&self, input: MiningInput<'_>) -> MiningResult<MiningOutput> {
        input.config.validate()?;

        let workers = input.config.parallel.effective_workers();
        if !input.config.parallel.enabled {
            return self.run_inner(&input, workers);
        }

        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| self.run_inner(&input, workers)),
            Err(e) => {
                warn!("rayon pool with {} workers unavailable ({}), using global pool", workers, e);
                self.run_inner(&input, rayon::current_num_threads())
            }
        }
    }
}
