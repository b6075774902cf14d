// Validation errors

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Report key used when the input is not a record at all.
pub const STRUCT_KEY: &str = "_struct";

/// Why a single rule rejected a value.
///
/// The `Display` text is the message shown to the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("{field} is required and cannot be empty")]
    Empty { field: String },

    #[error("{field} is a required field")]
    ZeroValue { field: String },

    #[error("{field} must be a string {purpose}")]
    NotAString { field: String, purpose: &'static str },

    #[error("the '{rule}' rule applies to sequences, but got {kind} for field {field}")]
    NotASequence {
        rule: &'static str,
        kind: &'static str,
        field: String,
    },

    #[error("the '{rule}' rule applies to files, but got {kind} for field {field}")]
    NotAFile {
        rule: &'static str,
        kind: &'static str,
        field: String,
    },

    #[error("invalid {what} parameter in rule '{rule}' for field {field}: {reason}")]
    InvalidParam {
        what: &'static str,
        rule: String,
        field: String,
        reason: String,
    },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: String, min: i64 },

    #[error("{field} must be at most {max} characters long")]
    TooLong { field: String, max: i64 },

    #[error("{field} is not a valid email")]
    InvalidEmail { field: String },

    #[error("{field} must contain at least one uppercase letter")]
    MissingUppercase { field: String },

    #[error("{field} must contain at least one lowercase letter")]
    MissingLowercase { field: String },

    #[error("{field} must contain at least one digit")]
    MissingDigit { field: String },

    #[error("{field} must contain at least one special character (e.g., !@#$%^&*)")]
    MissingSpecial { field: String },

    #[error("invalid confirm rule for {field}: missing target field name (e.g., confirm=Password)")]
    ConfirmWithoutTarget { field: String },

    #[error("cannot validate confirm rule for {field}: target field '{target}' not found in record")]
    ConfirmTargetNotFound { field: String, target: String },

    #[error("cannot validate confirm rule for {field}: target field '{target}' is not a string")]
    ConfirmTargetNotString { field: String, target: String },

    #[error("{field} must match {target}")]
    Mismatch { field: String, target: String },

    #[error("{field} must have more than {count} items")]
    TooFewItems { field: String, count: i64 },

    #[error("{field} is required (no file uploaded)")]
    NoFile { field: String },

    #[error("{field} is required (the uploaded file is empty)")]
    EmptyFile { field: String },

    #[error("file for {field} has an invalid type ('{received}'). Allowed types are: {allowed}")]
    FileType {
        field: String,
        received: String,
        allowed: String,
    },

    #[error("{field} must not exceed {limit} (got {size} bytes)")]
    FileTooLarge {
        field: String,
        limit: String,
        size: i64,
    },

    #[error("the 'dive' rule on {field} requires a sequence, but got {kind}")]
    DiveRequiresSequence { field: String, kind: &'static str },

    #[error("Invalid argument: input must be a record.")]
    NotARecord,
}

/// One entry of a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field path, e.g. `Email` or `Previews[1]`
    pub field: String,

    /// Message for the end user
    pub message: String,

    /// Rule that produced the message (`dive` and `_struct` for structural errors)
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating one record: field path → first failing message.
///
/// Paths are kept sorted so that two reports for the same input render
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for input that is not a record.
    pub fn not_a_record() -> Self {
        let mut report = Self::new();
        report.record(STRUCT_KEY, STRUCT_KEY, &RuleError::NotARecord);
        report
    }

    /// Store `error` under `path` unless the path already has a message.
    ///
    /// Returns whether the entry was stored.
    pub fn record(&mut self, path: &str, constraint: &str, error: &RuleError) -> bool {
        if self.errors.contains_key(path) {
            return false;
        }
        self.errors.insert(
            path.to_string(),
            ValidationError::new(path, error.to_string()).with_constraint(constraint),
        );
        true
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Message recorded for `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(|e| e.message.as_str())
    }

    pub fn error(&self, path: &str) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Plain path → message map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(path, e)| (path.clone(), e.message.clone()))
            .collect()
    }

    /// JSON body listing every entry with its constraint.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.values().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                })
            }).collect::<Vec<_>>()
        })
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in self.errors.values() {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// Serialized as the plain path → message object.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (path, error) in &self.errors {
            map.serialize_entry(path, &error.message)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationError;
    type IntoIter = std::collections::btree_map::Values<'a, String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}
