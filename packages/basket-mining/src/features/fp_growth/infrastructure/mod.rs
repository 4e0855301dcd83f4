//! FP-Growth infrastructure

pub mod miner;

pub use miner::FpGrowthMiner;
