//! Level-wise Miner (Apriori)
//!
//! Breadth-first candidate generation with anti-monotone pruning.

pub mod candidates;
pub mod miner;

pub use candidates::generate_candidates;
pub use miner::AprioriMiner;
