//! Error types for basket-mining
//!
//! Two failure families exist: malformed transaction input (`SchemaError`)
//! and out-of-domain parameters (`ConfigError`). Empty results are never
//! errors.

use thiserror::Error;

pub use crate::config::error::ConfigError;

/// Malformed transaction table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Table has no item columns
    #[error("Transaction table has no columns")]
    NoColumns,

    /// Column name appears more than once
    #[error("Duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// Row width differs from the header
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell value is not a boolean (coercion is the caller's job)
    #[error("Cell at row {row}, column '{column}' is not boolean: {value}")]
    NonBooleanCell {
        row: usize,
        column: String,
        value: String,
    },

    /// Basket references an item outside the universe
    #[error("Unknown item '{name}'")]
    UnknownItem { name: String },

    /// Itemset count contradicts the rest of a frequent collection
    #[error("Itemset {itemset} (count {count}) is inconsistent: {reason}")]
    InconsistentItemset {
        itemset: String,
        count: u64,
        reason: String,
    },
}

/// Main error type for mining operations
#[derive(Debug, Error)]
pub enum MiningError {
    /// Invalid transaction input
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Invalid threshold or parameter
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MiningError {
    pub fn is_schema(&self) -> bool {
        matches!(self, MiningError::Schema(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, MiningError::Config(_))
    }
}

/// Result type alias for mining operations
pub type MiningResult<T> = std::result::Result<T, MiningError>;
