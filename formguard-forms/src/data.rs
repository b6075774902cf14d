// Decoded multipart form

use crate::{FormError, FormResult, FormSettings};
use formguard_log::debug;
use formguard_validation::FileHandle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text values and file parts of a submitted form, keyed by part name.
///
/// A file part sent without a filename (an empty file input) is kept as
/// `None` so that records can report it as "no file uploaded".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    pub values: BTreeMap<String, Vec<String>>,
    pub files: BTreeMap<String, Vec<Option<FileHandle>>>,
    #[serde(skip)]
    settings: FormSettings,
    #[serde(skip)]
    total_size: u64,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: FormSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Attach a file part, enforcing the per-field count and memory limits.
    pub fn insert_file(&mut self, name: impl Into<String>, file: FileHandle) -> FormResult<()> {
        let name = name.into();

        let count = self.files.get(&name).map_or(0, Vec::len);
        if count >= self.settings.max_files_per_field {
            return Err(FormError::TooManyFiles {
                field: name,
                max: self.settings.max_files_per_field,
            });
        }

        let size = self.total_size.saturating_add(file.size.max(0) as u64);
        if size > self.settings.max_memory {
            debug!("Rejected file part {} ({} bytes)", name, file.size);
            return Err(FormError::FileTooLarge {
                field: name,
                size,
                max: self.settings.max_memory,
            });
        }
        self.total_size = size;

        let entry = if file.filename.is_empty() { None } else { Some(file) };
        self.files.entry(name).or_default().push(entry);
        Ok(())
    }

    /// Builder form of [`Self::insert_value`].
    pub fn value_part(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_value(name, value);
        self
    }

    /// Builder form of [`Self::insert_file`].
    pub fn file_part(mut self, name: impl Into<String>, file: FileHandle) -> FormResult<Self> {
        self.insert_file(name, file)?;
        Ok(self)
    }

    /// First value under `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)?.first().map(String::as_str)
    }

    /// First value under `name`, or an empty string.
    pub fn value_or_empty(&self, name: &str) -> String {
        self.value(name).unwrap_or_default().to_string()
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// First file under `name`, `None` if it is missing or was sent empty.
    pub fn file(&self, name: &str) -> Option<&FileHandle> {
        self.files.get(name)?.first()?.as_ref()
    }

    pub fn files(&self, name: &str) -> &[Option<FileHandle>] {
        self.files.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Bytes of file content attached so far.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value() {
        let form = FormData::new()
            .value_part("title", "Moon")
            .value_part("title", "Sun");

        assert_eq!(form.value("title"), Some("Moon"));
        assert_eq!(form.values("title").len(), 2);
        assert_eq!(form.value("author"), None);
        assert_eq!(form.value_or_empty("author"), "");
        assert!(form.values("author").is_empty());
    }

    #[test]
    fn test_files_keep_order_and_empty_parts() {
        let mut form = FormData::new();
        form.insert_file("previews[]", FileHandle::new("a.png", 3)).unwrap();
        form.insert_file("previews[]", FileHandle::new("", 0)).unwrap();

        let previews = form.files("previews[]");
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].as_ref().map(|f| f.filename.as_str()), Some("a.png"));
        assert!(previews[1].is_none());
        assert_eq!(form.file("previews[]").map(|f| f.size), Some(3));
        assert!(form.file("cover").is_none());
    }

    #[test]
    fn test_max_files_per_field() {
        let settings = FormSettings {
            max_files_per_field: 1,
            ..FormSettings::default()
        };
        let mut form = FormData::with_settings(settings);
        form.insert_file("cover", FileHandle::new("a.png", 1)).unwrap();

        let err = form.insert_file("cover", FileHandle::new("b.png", 1)).unwrap_err();
        assert_eq!(err.to_string(), "Too many files for cover (max: 1)");
        assert!(form.insert_file("avatar", FileHandle::new("c.png", 1)).is_ok());
    }

    #[test]
    fn test_max_memory() {
        let settings = FormSettings {
            max_memory: 100,
            ..FormSettings::default()
        };
        let mut form = FormData::with_settings(settings);
        form.insert_file("docs", FileHandle::new("a.pdf", 60)).unwrap();

        let err = form.insert_file("docs", FileHandle::new("b.pdf", 41)).unwrap_err();
        assert!(matches!(err, FormError::FileTooLarge { size: 101, max: 100, .. }));
        assert_eq!(form.total_size(), 60);
        assert_eq!(form.files("docs").len(), 1);
    }
}
