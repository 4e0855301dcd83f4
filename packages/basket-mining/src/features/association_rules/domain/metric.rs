//! Rule filtering metric

use crate::config::error::{ConfigError, ConfigResult};
use crate::features::metrics::RuleScores;
use serde::{Deserialize, Serialize};

/// Metric a rule must reach to be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMetric {
    /// support(A ∪ B), threshold in [0, 1]
    Support,
    /// support(A ∪ B) / support(A), threshold in [0, 1]
    Confidence,
    /// confidence / support(B), threshold >= 0
    Lift,
    /// support(A ∪ B) - support(A)·support(B), threshold in [-1, 1]
    Leverage,
    /// (1 - support(B)) / (1 - confidence), threshold >= 0
    Conviction,
}

impl RuleMetric {
    pub const ALL: [RuleMetric; 5] = [
        Self::Support,
        Self::Confidence,
        Self::Lift,
        Self::Leverage,
        Self::Conviction,
    ];

    /// Parse metric from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "support" => Ok(Self::Support),
            "confidence" => Ok(Self::Confidence),
            "lift" => Ok(Self::Lift),
            "leverage" => Ok(Self::Leverage),
            "conviction" => Ok(Self::Conviction),
            _ => Err(ConfigError::UnknownMetric(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Confidence => "confidence",
            Self::Lift => "lift",
            Self::Leverage => "leverage",
            Self::Conviction => "conviction",
        }
    }

    /// Inclusive threshold bounds (upper may be infinite)
    pub fn threshold_range(&self) -> (f64, f64) {
        match self {
            Self::Support | Self::Confidence => (0.0, 1.0),
            Self::Lift | Self::Conviction => (0.0, f64::INFINITY),
            Self::Leverage => (-1.0, 1.0),
        }
    }

    /// Reject thresholds outside the metric's domain
    ///
    /// Out-of-range values are errors, never clamped.
    pub fn validate_threshold(&self, threshold: f64) -> ConfigResult<()> {
        let (min, max) = self.threshold_range();
        if threshold.is_nan() || threshold < min || threshold > max {
            let max_label = if max.is_infinite() {
                String::from("inf")
            } else {
                max.to_string()
            };
            return Err(ConfigError::range_with_hint(
                format!("{}_threshold", self.as_str()),
                threshold,
                min,
                max_label,
                format!("Rule threshold for metric '{}'", self.as_str()),
            ));
        }
        Ok(())
    }

    /// Value of this metric for a scored rule
    pub fn value(&self, scores: &RuleScores) -> f64 {
        match self {
            Self::Support => scores.support,
            Self::Confidence => scores.confidence,
            Self::Lift => scores.lift,
            Self::Leverage => scores.leverage,
            Self::Conviction => scores.conviction,
        }
    }
}

impl Default for RuleMetric {
    fn default() -> Self {
        Self::Lift
    }
}

impl std::fmt::Display for RuleMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
