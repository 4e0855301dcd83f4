//! Shared utilities

pub mod bitset;
pub mod combinations;
pub mod threshold;

pub use bitset::BitSet;
pub use combinations::{proper_subsets, Combinations};
pub use threshold::{validate_min_support, SupportThreshold};
