//! Configuration I/O schema
//!
//! Defines YAML schema types. Loading and export live on `MiningConfig`
//! to keep field access in one place.

use super::mining_config::{Algorithm, ParallelConfig, ReportConfig, RuleConfig};
use serde::{Deserialize, Serialize};

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiningConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Field overrides applied on top of the preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<MiningOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiningOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_support: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}
