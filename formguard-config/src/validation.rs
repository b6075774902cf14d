// Checks applied to loaded settings

use crate::{ConfigError, Result};

/// Checked after a typed configuration has been deserialized.
pub trait ValidateConfig {
    fn validate(&self) -> Result<()>;
}

/// Reusable checks for [`ValidateConfig`] implementations.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn positive(value: u64, field: &str) -> Result<()> {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must be greater than 0",
                field
            )));
        }
        Ok(())
    }

    pub fn in_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {} (got {})",
                field, min, max, value
            )));
        }
        Ok(())
    }

    pub fn one_of<T: PartialEq + std::fmt::Debug>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of {:?}",
                field, allowed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(ConfigValidator::not_empty("uploads", "label").is_ok());
        assert!(ConfigValidator::not_empty("  ", "label").is_err());
    }

    #[test]
    fn test_positive() {
        assert!(ConfigValidator::positive(1, "max_memory").is_ok());
        assert!(ConfigValidator::positive(0, "max_memory").is_err());
    }

    #[test]
    fn test_in_range_message() {
        let err = ConfigValidator::in_range(40, 1, 32, "max_files_per_field").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid setting: max_files_per_field must be between 1 and 32 (got 40)"
        );
    }

    #[test]
    fn test_one_of() {
        assert!(ConfigValidator::one_of(&"json", &["json", "toml"], "format").is_ok());
        assert!(ConfigValidator::one_of(&"yaml", &["json", "toml"], "format").is_err());
    }
}
