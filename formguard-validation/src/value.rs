// Field values as seen by the rule evaluators

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata of an uploaded file.
///
/// The engine never opens or reads the file; it only looks at the name,
/// the size and the declared `Content-Type` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// Original filename as sent by the client
    pub filename: String,
    /// Size in bytes
    pub size: i64,
    /// Part headers, e.g. `Content-Type`
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl FileHandle {
    pub fn new(filename: impl Into<String>, size: i64) -> Self {
        Self {
            filename: filename.into(),
            size,
            headers: BTreeMap::new(),
        }
    }

    /// Set the declared `Content-Type` header.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Declared content type, empty when the client sent none.
    pub fn content_type(&self) -> &str {
        self.header("Content-Type").unwrap_or("")
    }

    /// Lower-cased text after the last `.` of the filename, empty if there is none.
    pub fn extension(&self) -> String {
        let name = self
            .filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.filename);
        match name.rfind('.') {
            Some(idx) => name[idx + 1..].to_lowercase(),
            None => String::new(),
        }
    }
}

/// Opaque scalar, only ever checked for being its type's zero value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
}

impl Scalar {
    pub fn is_zero(&self) -> bool {
        match *self {
            Scalar::Bool(b) => !b,
            Scalar::Int(n) => n == 0,
            Scalar::UInt(n) => n == 0,
            Scalar::Float(n) => n == 0.0,
            Scalar::Char(c) => c == '\0',
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::UInt(_) => "uint",
            Scalar::Float(_) => "float",
            Scalar::Char(_) => "char",
        }
    }
}

/// The value of one record field, borrowed from the record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    StrList(Vec<&'a str>),
    /// `None` when no file was uploaded
    File(Option<&'a FileHandle>),
    /// Elements may be absent, e.g. an empty multipart part
    FileList(Vec<Option<&'a FileHandle>>),
    Scalar(Scalar),
}

impl<'a> FieldValue<'a> {
    /// Short name used in wrong-kind messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::StrList(_) => "string list",
            FieldValue::File(_) => "file",
            FieldValue::FileList(_) => "file list",
            FieldValue::Scalar(s) => s.kind(),
        }
    }

    /// Length for the kinds where emptiness is measured by length.
    pub fn len(&self) -> Option<usize> {
        match self {
            FieldValue::Str(s) => Some(s.len()),
            FieldValue::StrList(items) => Some(items.len()),
            FieldValue::FileList(items) => Some(items.len()),
            FieldValue::File(_) | FieldValue::Scalar(_) => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldValue::StrList(_) | FieldValue::FileList(_))
    }

    /// Elements of a sequence as standalone values, `None` for non-sequences.
    pub fn elements(&self) -> Option<Vec<FieldValue<'a>>> {
        match self {
            FieldValue::StrList(items) => Some(items.iter().map(|s| FieldValue::Str(*s)).collect()),
            FieldValue::FileList(items) => Some(items.iter().map(|f| FieldValue::File(*f)).collect()),
            _ => None,
        }
    }
}

/// Conversion from a struct field to a [`FieldValue`].
///
/// `#[derive(Record)]` calls this for every annotated field.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for &str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for Vec<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::StrList(self.iter().map(String::as_str).collect())
    }
}

impl AsFieldValue for Vec<&str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::StrList(self.clone())
    }
}

impl AsFieldValue for FileHandle {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::File(Some(self))
    }
}

impl AsFieldValue for Option<FileHandle> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::File(self.as_ref())
    }
}

impl AsFieldValue for Vec<FileHandle> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::FileList(self.iter().map(Some).collect())
    }
}

impl AsFieldValue for Vec<Option<FileHandle>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::FileList(self.iter().map(Option::as_ref).collect())
    }
}

macro_rules! scalar_field_value {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Scalar(Scalar::$variant(*self as $target))
                }
            }
        )+
    };
}

scalar_field_value!(Int as i64: i8, i16, i32, i64, isize);
scalar_field_value!(UInt as u64: u8, u16, u32, u64, usize);
scalar_field_value!(Float as f64: f32, f64);

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Bool(*self))
    }
}

impl AsFieldValue for char {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Char(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_lookup_is_case_insensitive() {
        let file = FileHandle::new("cover.png", 10).with_header("content-type", "image/png");
        assert_eq!(file.content_type(), "image/png");
        assert_eq!(FileHandle::new("x", 1).content_type(), "");
    }

    #[test]
    fn test_extension() {
        assert_eq!(FileHandle::new("Cover.PNG", 1).extension(), "png");
        assert_eq!(FileHandle::new("archive.tar.gz", 1).extension(), "gz");
        assert_eq!(FileHandle::new("README", 1).extension(), "");
        assert_eq!(FileHandle::new("dir.d/README", 1).extension(), "");
    }

    #[test]
    fn test_scalar_zero_values() {
        assert!(0i32.as_field_value() == FieldValue::Scalar(Scalar::Int(0)));
        assert!(Scalar::Bool(false).is_zero());
        assert!(!Scalar::UInt(3).is_zero());
        assert!(Scalar::Float(0.0).is_zero());
        assert!(Scalar::Char('\0').is_zero());
    }

    #[test]
    fn test_elements_of_file_list_keep_absent_entries() {
        let files = vec![Some(FileHandle::new("a.pdf", 1)), None];
        let value = files.as_field_value();
        let elements = value.elements().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1], FieldValue::File(None));
        assert!(FieldValue::Str("x").elements().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldValue::Str("").kind(), "string");
        assert_eq!(vec!["a"].as_field_value().kind(), "string list");
        assert_eq!(None::<FileHandle>.as_field_value().kind(), "file");
        assert_eq!(true.as_field_value().kind(), "bool");
    }
}
