pub mod generator;

pub use generator::{compare_rules, RuleGenerator};
