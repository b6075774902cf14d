//! Error types for form handling

use formguard_config::ConfigError;
use formguard_validation::ValidationReport;
use thiserror::Error;

/// Form handling error types
#[derive(Error, Debug)]
pub enum FormError {
    /// The decoded record failed validation
    #[error("Validation failed:\n{0}")]
    Validation(ValidationReport),

    /// More files than allowed under one field name
    #[error("Too many files for {field} (max: {max})")]
    TooManyFiles { field: String, max: usize },

    /// Attached files exceed the form memory budget
    #[error("File too large for {field}: form would hold {size} bytes (max: {max} bytes)")]
    FileTooLarge { field: String, size: u64, max: u64 },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<ValidationReport> for FormError {
    fn from(report: ValidationReport) -> Self {
        FormError::Validation(report)
    }
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
