//! Mining configuration types
//!
//! One struct per concern, each implementing `Validatable`:
//! - `MiningConfig`: support threshold, algorithm, itemset size cap
//! - `RuleConfig`: rule metric + minimum threshold
//! - `ParallelConfig`: rayon worker pool sizing

use super::error::{ConfigError, ConfigResult};
use super::io::{MiningConfigFileV1, MiningOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::Validatable;
use crate::features::association_rules::RuleMetric;
use crate::features::miner::validate_max_len;
use crate::shared::utils::threshold::validate_min_support;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum rayon workers accepted by `ParallelConfig`
pub const MAX_WORKERS: usize = 256;

/// Default confidence above which a rule counts as "strong" in reports
pub const STRONG_RULE_CONFIDENCE: f64 = 0.5;

/// Default number of top itemsets listed per miner in reports
pub const DEFAULT_TOP_ITEMSETS: usize = 10;

// ============================================================================
// Algorithm
// ============================================================================

/// Frequent itemset mining strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Level-wise candidate generation
    Apriori,
    /// Prefix-tree recursive mining
    #[serde(rename = "fpgrowth")]
    FpGrowth,
}

impl Algorithm {
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "apriori" => Ok(Self::Apriori),
            "fpgrowth" => Ok(Self::FpGrowth),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apriori => "apriori",
            Self::FpGrowth => "fpgrowth",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::FpGrowth
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Rule Generation Configuration
// ============================================================================

/// Rule generation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Metric used for filtering
    pub metric: RuleMetric,

    /// Minimum value of `metric` for a rule to be kept
    pub min_threshold: f64,
}

impl RuleConfig {
    pub fn new(metric: RuleMetric, min_threshold: f64) -> Self {
        Self {
            metric,
            min_threshold,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory | Preset::Balanced => Self::new(RuleMetric::Lift, 1.0),
            Preset::Strict => Self::new(RuleMetric::Confidence, 0.8),
        }
    }

    pub fn metric(mut self, metric: RuleMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn min_threshold(mut self, min_threshold: f64) -> Self {
        self.min_threshold = min_threshold;
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for RuleConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.metric.validate_threshold(self.min_threshold)
    }

    fn config_name(&self) -> &'static str {
        "RuleConfig"
    }
}

// ============================================================================
// Parallel Execution Configuration
// ============================================================================

/// Parallel execution configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Use rayon for counting, conditional trees and rule splits
    pub enabled: bool,

    /// Worker threads (0 = one per CPU)
    pub num_workers: usize,
}

impl ParallelConfig {
    pub fn serial() -> Self {
        Self {
            enabled: false,
            num_workers: 1,
        }
    }

    /// Resolve `num_workers`, mapping 0 to the detected CPU count
    pub fn effective_workers(&self) -> usize {
        if !self.enabled {
            return 1;
        }
        if self.num_workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.num_workers
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_workers: 0,
        }
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > MAX_WORKERS {
            return Err(ConfigError::range_with_hint(
                "num_workers",
                self.num_workers,
                0,
                MAX_WORKERS,
                "Use 0 to size the pool from the CPU count",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ParallelConfig"
    }
}

// ============================================================================
// Report Configuration
// ============================================================================

/// Reporting-only settings; never affects what is mined or kept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rules with confidence strictly above this count as strong
    pub strong_confidence: f64,

    /// Itemsets listed per miner
    pub top_n: usize,
}

impl ReportConfig {
    pub fn strong_confidence(mut self, strong_confidence: f64) -> Self {
        self.strong_confidence = strong_confidence;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn is_strong(&self, confidence: f64) -> bool {
        confidence > self.strong_confidence
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strong_confidence: STRONG_RULE_CONFIDENCE,
            top_n: DEFAULT_TOP_ITEMSETS,
        }
    }
}

impl Validatable for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.strong_confidence) {
            return Err(ConfigError::range_with_hint(
                "strong_confidence",
                self.strong_confidence,
                0,
                1,
                "Confidence is a fraction of the antecedent's transactions",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ReportConfig"
    }
}

// ============================================================================
// Mining Configuration
// ============================================================================

/// Complete configuration of a mining pass
///
/// # Example
/// ```
/// use basket_mining::config::{MiningConfig, Preset, Validatable};
/// use basket_mining::RuleMetric;
///
/// let config = MiningConfig::preset(Preset::Balanced)
///     .min_support(0.1)
///     .rules(|r| r.metric(RuleMetric::Confidence).min_threshold(0.6));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Preset the configuration was derived from
    pub preset: Preset,

    /// Minimum support, fraction of transactions in (0, 1]
    pub min_support: f64,

    /// Miner to run
    pub algorithm: Algorithm,

    /// Largest itemset size to mine (None = unbounded)
    pub max_len: Option<usize>,

    /// Rule generation settings
    pub rules: RuleConfig,

    /// Parallel execution settings
    pub parallel: ParallelConfig,

    /// Comparison report settings
    pub report: ReportConfig,
}

impl MiningConfig {
    /// Start from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            min_support: preset.min_support(),
            algorithm: Algorithm::default(),
            max_len: None,
            rules: RuleConfig::from_preset(preset),
            parallel: ParallelConfig::default(),
            report: ReportConfig::default(),
        }
    }

    pub fn min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Override rule settings
    pub fn rules<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RuleConfig) -> RuleConfig,
    {
        self.rules = f(self.rules);
        self
    }

    /// Override parallel settings
    pub fn parallel<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ParallelConfig) -> ParallelConfig,
    {
        self.parallel = f(self.parallel);
        self
    }

    /// Override report settings
    pub fn report<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ReportConfig) -> ReportConfig,
    {
        self.report = f(self.report);
        self
    }

    /// Load a versioned YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a versioned YAML configuration
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        if raw.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }

        let file: MiningConfigFileV1 = serde_yaml::from_value(raw)?;
        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&file.preset)?;
        let mut config = Self::preset(preset);
        if let Some(overrides) = file.overrides {
            config.apply(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as a YAML v1 document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = MiningConfigFileV1 {
            version: 1,
            preset: self.preset.as_str().to_string(),
            overrides: Some(MiningOverrides {
                min_support: Some(self.min_support),
                algorithm: Some(self.algorithm),
                max_len: self.max_len,
                rules: Some(self.rules),
                parallel: Some(self.parallel),
                report: Some(self.report),
            }),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    fn apply(&mut self, overrides: MiningOverrides) {
        if let Some(min_support) = overrides.min_support {
            self.min_support = min_support;
        }
        if let Some(algorithm) = overrides.algorithm {
            self.algorithm = algorithm;
        }
        if overrides.max_len.is_some() {
            self.max_len = overrides.max_len;
        }
        if let Some(rules) = overrides.rules {
            self.rules = rules;
        }
        if let Some(parallel) = overrides.parallel {
            self.parallel = parallel;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for MiningConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_min_support(self.min_support)?;

        validate_max_len(self.max_len)?;
        self.rules.validate()?;
        self.parallel.validate()?;
        self.report.validate()
    }

    fn config_name(&self) -> &'static str {
        "MiningConfig"
    }
}
