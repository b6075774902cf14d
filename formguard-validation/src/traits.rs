// Record traits

use crate::{FieldValue, ValidationReport};

/// One declared field of a record together with its rule annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Name used in report paths and by `confirm=<Name>`
    pub name: &'static str,
    /// Raw annotation, `None` when the field carries none
    pub rules: Option<&'static str>,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, rules: Option<&'static str>, value: FieldValue<'a>) -> Self {
        Self { name, rules, value }
    }
}

/// A type whose fields can be walked in declaration order.
///
/// Usually implemented with `#[derive(Record)]`; a hand-written
/// implementation must list the fields in the order they are declared.
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Anything that can be handed to [`crate::validate`].
///
/// Records answer with themselves; every other type is reported as
/// `_struct`.
pub trait Validatable {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl Validatable for dyn Record + '_ {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

macro_rules! not_a_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl Validatable for $ty {})+
    };
}

not_a_record!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, ()
);

impl<T> Validatable for [T] {}
impl<T> Validatable for Vec<T> {}
impl<T> Validatable for Option<T> {}

/// Validation entry point as a method.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationReport>;
}

impl<T: Record> Validate for T {
    fn validate(&self) -> Result<(), ValidationReport> {
        crate::engine::validate_record(self)
    }
}
