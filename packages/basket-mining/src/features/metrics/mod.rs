//! Metric Engine
//!
//! Pure scoring functions over exact itemset counts.

pub mod engine;

pub use engine::{confidence, conviction, leverage, lift, support, RuleScores};
