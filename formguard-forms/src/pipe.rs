// Form pipe for decoding and validating in one step

use crate::{FormData, FormError, FromForm};
use formguard_log::debug;
use formguard_validation::{validate, Validatable, ValidationReport};
use serde_json::{json, Value};

/// Decodes a form into a record and validates it
pub struct FormPipe;

impl FormPipe {
    /// Build `T` from the form and reject it unless every rule passes
    pub fn parse<T>(form: &FormData) -> Result<T, FormError>
    where
        T: FromForm + Validatable,
    {
        let record = T::from_form(form);

        if let Err(report) = validate(&record) {
            debug!(
                "Rejected {}: {} failing fields",
                std::any::type_name::<T>(),
                report.len()
            );
            return Err(FormError::Validation(report));
        }

        Ok(record)
    }

    /// JSON body for a rejected form: `{"errors": {path: message}}`
    pub fn error_body(report: &ValidationReport) -> Value {
        json!({ "errors": report })
    }
}
