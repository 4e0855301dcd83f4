//! Mining Configuration System
//!
//! Three tiers, from simplest to most explicit:
//! - Level 1: Preset - one-liner defaults
//! - Level 2: Builder overrides - adjust support, algorithm or rule filter
//! - Level 3: YAML - versioned file for repeatable runs
//!
//! # Examples
//!
//! ```rust,ignore
//! use basket_mining::config::{MiningConfig, Preset};
//!
//! // Level 1
//! let config = MiningConfig::preset(Preset::Balanced);
//!
//! // Level 2
//! let config = MiningConfig::preset(Preset::Balanced)
//!     .min_support(0.1)
//!     .rules(|r| r.metric(RuleMetric::Confidence).min_threshold(0.6));
//!
//! // Level 3
//! let config = MiningConfig::from_yaml("basket.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod mining_config;
pub mod preset;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{MiningConfigFileV1, MiningOverrides};
pub use mining_config::{
    Algorithm, MiningConfig, ParallelConfig, ReportConfig, RuleConfig, STRONG_RULE_CONFIDENCE,
};
pub use preset::Preset;
pub use validation::Validatable;
