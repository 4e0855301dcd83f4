/*
 * Basket Mining - Frequent Pattern & Association Rule Engine
 *
 * Feature-First Architecture:
 * - shared/      : Canonical itemsets, bitsets, support thresholds, output contract
 * - features/    : Vertical slices (transactions → metrics → apriori / fp_growth → association_rules)
 * - application/ : Use cases (configured mining pass, miner comparison)
 * - api/         : Call contracts for the reporting layer
 *
 * Performance:
 * - Vertical tid-bitsets for exact support counting
 * - Rayon work-stealing per candidate, per conditional tree, per itemset
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (store, metrics, miners, rules)
pub mod features;

/// Configuration system (presets, YAML, validation)
pub mod config;

/// Use case layer
pub mod application;

/// Call contracts for external callers
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{generate_rules, mine_apriori, mine_fpgrowth};
pub use application::{
    compare_miners, MinerComparison, MinerSummary, MiningInput, MiningOutput, MiningStats,
    MiningUseCase, MiningUseCaseImpl,
};
pub use config::{Algorithm, ConfigError, MiningConfig, Preset, ReportConfig, RuleConfig};
pub use errors::{MiningError, MiningResult, SchemaError};
pub use features::association_rules::{AssociationRule, RuleGenerator, RuleMetric};
pub use features::transactions::{RawTable, TransactionStore};
pub use shared::models::{FrequentItemset, FrequentItemsets, ItemId, Itemset};
