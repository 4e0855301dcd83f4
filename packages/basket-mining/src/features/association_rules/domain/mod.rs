//! Association rule domain model

pub mod metric;
pub mod rule;

pub use metric::RuleMetric;
pub use rule::AssociationRule;
