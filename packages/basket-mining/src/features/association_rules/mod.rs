//! Rule Generator
//!
//! Turns a frequent-itemset collection into scored, filtered and sorted
//! association rules.
//!
//! Hexagonal layout:
//! - domain/         : AssociationRule, RuleMetric
//! - infrastructure/ : RuleGenerator

pub mod domain;
pub mod infrastructure;

pub use domain::{AssociationRule, RuleMetric};
pub use infrastructure::{compare_rules, RuleGenerator};
