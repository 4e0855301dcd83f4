//! Feature modules
//!
//! Vertical slices, bottom-up:
//! - transactions      : validated boolean store
//! - metrics           : support / confidence / lift scoring
//! - apriori           : level-wise miner
//! - fp_growth         : prefix-tree miner
//! - association_rules : rule derivation and ranking

pub mod apriori;
pub mod association_rules;
pub mod fp_growth;
pub mod metrics;
pub mod miner;
pub mod transactions;

pub use miner::{ItemsetMiner, MinerOptions};
