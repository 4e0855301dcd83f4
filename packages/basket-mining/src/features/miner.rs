//! Miner abstraction
//!
//! Apriori and FP-Growth are interchangeable producers of the same
//! `FrequentItemsets` contract.

use crate::config::error::{ConfigError, ConfigResult};
use crate::errors::MiningResult;
use crate::features::transactions::TransactionStore;
use crate::shared::models::FrequentItemsets;

/// Options shared by both miners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinerOptions {
    /// Largest itemset size to emit (None = unbounded)
    pub max_len: Option<usize>,

    /// Use rayon where the miner supports it
    pub parallel: bool,
}

impl MinerOptions {
    pub fn serial() -> Self {
        Self {
            max_len: None,
            parallel: false,
        }
    }

    /// # Errors
    /// `ConfigError` when `max_len` is `Some(0)`
    pub fn validate(&self) -> ConfigResult<()> {
        validate_max_len(self.max_len)
    }

    pub(crate) fn allows_len(&self, len: usize) -> bool {
        self.max_len.map_or(true, |max| len <= max)
    }

    pub(crate) fn use_rayon(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}

impl Default for MinerOptions {
    fn default() -> Self {
        Self {
            max_len: None,
            parallel: true,
        }
    }
}

/// Reject a size cap of zero (no itemset could be emitted)
pub fn validate_max_len(max_len: Option<usize>) -> ConfigResult<()> {
    if max_len == Some(0) {
        return Err(ConfigError::range_with_hint(
            "max_len",
            0,
            1,
            "unbounded",
            "Omit max_len to mine itemsets of any size",
        ));
    }
    Ok(())
}

/// Frequent itemset miner
pub trait ItemsetMiner: Send + Sync {
    /// Miner name
    fn name(&self) -> &'static str;

    /// Mine every itemset whose support reaches `min_support`
    ///
    /// # Errors
    /// `ConfigError` when `min_support` is outside (0, 1] or the miner was
    /// built with `max_len: Some(0)`. An empty store yields an empty
    /// collection.
    fn mine(&self, store: &TransactionStore, min_support: f64) -> MiningResult<FrequentItemsets>;
}
