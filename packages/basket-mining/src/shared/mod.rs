//! Shared module - Common types and utilities
//!
//! Types consumed by every mining feature. Canonical itemset ordering lives
//! here once so both miners and the rule generator agree on equality,
//! hashing and output order.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::bitset::BitSet;
pub use utils::threshold::SupportThreshold;
