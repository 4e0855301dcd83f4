//! FP-Growth domain model

pub mod fp_tree;

pub use fp_tree::{FpTree, HeaderEntry, NodeId, WeightedPath};
