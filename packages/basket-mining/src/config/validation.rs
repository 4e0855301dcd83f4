//! Configuration validation
//!
//! Provides the validation trait shared by all configuration structs.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use basket_mining::config::Validatable;
///
/// fn run<C: Validatable>(config: C) -> Result<(), ConfigError> {
///     config.validate()?;
///     // ... mine
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
