//! Support threshold arithmetic
//!
//! Both miners compare integer counts against a precomputed `min_count`
//! instead of comparing floats per candidate. `min_count` is the smallest
//! count `c` with `c / n >= min_support` under f64 division, so the integer
//! test agrees exactly with the fractional definition.

use crate::config::error::{ConfigError, ConfigResult};

/// Reject supports outside (0, 1] and NaN
pub fn validate_min_support(min_support: f64) -> ConfigResult<()> {
    if min_support.is_nan() || min_support <= 0.0 || min_support > 1.0 {
        return Err(ConfigError::range_with_hint(
            "min_support",
            min_support,
            "0 (exclusive)",
            1,
            "Support is the fraction of transactions containing the itemset",
        ));
    }
    Ok(())
}

/// Minimum support resolved against a transaction count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportThreshold {
    min_support: f64,
    transaction_count: u64,
    min_count: u64,
}

impl SupportThreshold {
    pub fn new(min_support: f64, transaction_count: u64) -> ConfigResult<Self> {
        validate_min_support(min_support)?;
        Ok(Self {
            min_support,
            transaction_count,
            min_count: min_count_for(min_support, transaction_count),
        })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn transaction_count(&self) -> u64 {
        self.transaction_count
    }

    /// Smallest qualifying count (at least 1)
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    pub fn is_frequent(&self, count: u64) -> bool {
        count >= self.min_count
    }
}

fn min_count_for(min_support: f64, n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    let reaches = |c: u64| c as f64 / n as f64 >= min_support;

    let mut count = ((min_support * n as f64).floor() as u64).min(n);
    while count < n && !reaches(count) {
        count += 1;
    }
    while count > 0 && reaches(count - 1) {
        count -= 1;
    }
    count.max(1)
}
