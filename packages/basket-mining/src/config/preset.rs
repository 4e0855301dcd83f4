//! Preset configurations
//!
//! Presets provide complete default mining configurations for common use cases.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Wide net for small or sparse catalogues
    ///
    /// - min_support: 0.01
    /// - Rules: lift >= 1.0
    Exploratory,

    /// Market-basket defaults
    ///
    /// - min_support: 0.05
    /// - Rules: lift >= 1.0
    Balanced,

    /// Only dense, reliable patterns
    ///
    /// - min_support: 0.2
    /// - Rules: confidence >= 0.8
    Strict,
}

impl Preset {
    /// Minimum support for this preset
    pub fn min_support(&self) -> f64 {
        match self {
            Self::Exploratory => 0.01,
            Self::Balanced => 0.05,
            Self::Strict => 0.2,
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "exploratory" => Ok(Self::Exploratory),
            "balanced" => Ok(Self::Balanced),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exploratory => "exploratory",
            Self::Balanced => "balanced",
            Self::Strict => "strict",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
