// formguard - declarative validation for form records and uploads
//
// Fields carry rule annotations such as "required,min=7,password"; the
// engine walks a record's fields in order and returns one message per
// failing field path.

// Re-export the engine
pub use formguard_validation::*;

// Re-export logging
pub use formguard_log as log;

// Re-export optional crates
#[cfg(feature = "config")]
pub use formguard_config;

#[cfg(feature = "forms")]
pub use formguard_forms;

/// Prelude for common imports.
///
/// Records derived through this crate name it with `crate = "formguard"`.
///
/// ```
/// use formguard::prelude::*;
///
/// #[derive(Record)]
/// #[validate(crate = "formguard", rename_all = "PascalCase")]
/// struct Comment {
///     #[validate("required,max=280")]
///     body: String,
/// }
///
/// let comment = Comment { body: String::new() };
/// let report = comment.validate().unwrap_err();
/// assert_eq!(report.get("Body"), Some("Body is required and cannot be empty"));
/// ```
pub mod prelude {
    pub use crate::{
        AsFieldValue, Field, FieldValue, FileHandle, Record, Validatable, Validate,
        ValidationError, ValidationReport, validate,
    };

    #[cfg(feature = "config")]
    pub use formguard_config::{ConfigManager, ValidateConfig};

    #[cfg(feature = "forms")]
    pub use formguard_forms::{FormData, FormError, FormPipe, FormSettings, FromForm};
}
