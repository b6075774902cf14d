// Validators for uploaded file metadata

use crate::{FieldValue, FileHandle, Rule, RuleError};

fn expect_file<'v>(
    value: &'v FieldValue<'_>,
    rule: &'static str,
    field: &str,
) -> Result<Option<&'v FileHandle>, RuleError> {
    match value {
        FieldValue::File(file) => Ok(*file),
        other => Err(RuleError::NotAFile {
            rule,
            kind: other.kind(),
            field: field.to_string(),
        }),
    }
}

/// `file_required`: a file was uploaded and it is not empty.
pub struct FileRequired;

impl FileRequired {
    pub fn validate(value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        match expect_file(value, "file_required", field)? {
            None => Err(RuleError::NoFile {
                field: field.to_string(),
            }),
            Some(file) if file.size <= 0 => Err(RuleError::EmptyFile {
                field: field.to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// `file_types=<a;b;...>`: allowed content types or extensions.
///
/// A file passes when its declared content type starts with an allowed
/// entry, or failing that when an allowed entry contains its extension.
/// The extension fallback is a substring test, so `file_types=image/png`
/// also admits a `.png` file declared as `text/plain`, and a `.ng` file.
/// It is lax at the edges: a filename without an extension matches any
/// list, and an empty entry (`image/png;`) matches any declared type.
#[derive(Debug, Clone)]
pub struct FileTypes<'p> {
    /// The list as written in the annotation, used in messages
    pub raw: &'p str,
    /// Lower-cased, trimmed entries; empty ones are kept
    pub allowed: Vec<String>,
}

impl<'p> FileTypes<'p> {
    pub fn parse(raw: &'p str) -> Self {
        let allowed = raw
            .to_lowercase()
            .split(';')
            .map(|entry| entry.trim().to_string())
            .collect();
        Self { raw, allowed }
    }

    pub fn accepts(&self, file: &FileHandle) -> bool {
        let content_type = file.content_type().to_lowercase();
        if !content_type.is_empty()
            && self
                .allowed
                .iter()
                .any(|allowed| content_type.starts_with(allowed.as_str()))
        {
            return true;
        }

        let extension = file.extension();
        self.allowed
            .iter()
            .any(|allowed| allowed.contains(extension.as_str()))
    }

    pub fn validate(&self, value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        // Presence is file_required's job.
        let Some(file) = expect_file(value, "file_types", field)? else {
            return Ok(());
        };

        if self.accepts(file) {
            Ok(())
        } else {
            Err(RuleError::FileType {
                field: field.to_string(),
                received: file.content_type().to_string(),
                allowed: self.raw.to_string(),
            })
        }
    }
}

/// `file_max_size=<size>`: upper bound on the file size, e.g. `2MB`.
pub struct FileMaxSize<'p> {
    /// The limit as written, used in messages
    pub raw: &'p str,
    pub bytes: i64,
}

impl<'p> FileMaxSize<'p> {
    pub fn parse(rule: &Rule<'p>, field: &str) -> Result<Self, RuleError> {
        let invalid = |reason: String| RuleError::InvalidParam {
            what: "'file_max_size'",
            rule: rule.raw.to_string(),
            field: field.to_string(),
            reason,
        };

        let raw = rule.param.trim();
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let (digits, unit) = raw.split_at(split);

        let amount: i64 = digits.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
        let multiplier: i64 = match unit.trim().to_ascii_uppercase().as_str() {
            "" | "B" => 1,
            "K" | "KB" => 1 << 10,
            "M" | "MB" => 1 << 20,
            "G" | "GB" => 1 << 30,
            other => return Err(invalid(format!("unknown size unit '{}'", other))),
        };
        let bytes = amount
            .checked_mul(multiplier)
            .ok_or_else(|| invalid("size overflows".to_string()))?;

        Ok(Self {
            raw: rule.param,
            bytes,
        })
    }

    pub fn validate(&self, value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        match expect_file(value, "file_max_size", field)? {
            Some(file) if file.size > self.bytes => Err(RuleError::FileTooLarge {
                field: field.to_string(),
                limit: self.raw.to_string(),
                size: file.size,
            }),
            _ => Ok(()),
        }
    }
}
