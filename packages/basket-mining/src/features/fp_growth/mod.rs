//! Prefix-tree Miner (FP-Growth)
//!
//! Compresses the store into an FP-tree and mines conditional trees without
//! candidate generation.
//!
//! Hexagonal layout:
//! - domain/         : FP-tree arena and header table
//! - infrastructure/ : Work-list miner

pub mod domain;
pub mod infrastructure;

pub use domain::FpTree;
pub use infrastructure::FpGrowthMiner;
