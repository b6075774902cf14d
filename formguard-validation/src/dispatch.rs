// Rule dispatch

use crate::upload::{FileMaxSize, FileRequired, FileTypes};
use crate::validators::{parse_count, Confirm, IsEmail, MaxLength, MinLength, MoreThan, Password, Required};
use crate::{Field, FieldValue, Rule, RuleError, RuleKind};

/// Signature shared by every rule evaluator.
///
/// `siblings` are the fields of the enclosing record, used by `confirm`.
pub type Evaluator = fn(&Rule<'_>, &FieldValue<'_>, &str, &[Field<'_>]) -> Result<(), RuleError>;

/// Evaluator for a rule kind. Unknown rules always pass.
pub fn evaluator(kind: RuleKind) -> Evaluator {
    match kind {
        RuleKind::Required => required,
        RuleKind::Min => min,
        RuleKind::Max => max,
        RuleKind::Email => email,
        RuleKind::Password => password,
        RuleKind::Confirm => confirm,
        RuleKind::Gt => gt,
        RuleKind::FileRequired => file_required,
        RuleKind::FileTypes => file_types,
        RuleKind::FileMaxSize => file_max_size,
        RuleKind::Unknown => unknown,
    }
}

/// Evaluate one rule against a value at `path`.
pub fn apply(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, siblings: &[Field<'_>]) -> Result<(), RuleError> {
    evaluator(rule.kind)(rule, value, path, siblings)
}

fn required(_: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    Required::validate(value, path)
}

fn min(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    if !matches!(value, FieldValue::Str(_)) {
        return MinLength(0).validate(value, path);
    }
    MinLength(parse_count(rule, "min length", path)?).validate(value, path)
}

fn max(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    if !matches!(value, FieldValue::Str(_)) {
        return MaxLength(0).validate(value, path);
    }
    MaxLength(parse_count(rule, "max length", path)?).validate(value, path)
}

fn email(_: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    IsEmail::validate(value, path)
}

fn password(_: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    Password::validate(value, path)
}

fn confirm(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, siblings: &[Field<'_>]) -> Result<(), RuleError> {
    Confirm { target: rule.param }.validate(value, path, siblings)
}

fn gt(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    if !value.is_sequence() {
        return MoreThan(0).validate(value, path);
    }
    MoreThan(parse_count(rule, "'gt'", path)?).validate(value, path)
}

fn file_required(_: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    FileRequired::validate(value, path)
}

fn file_types(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    FileTypes::parse(rule.param).validate(value, path)
}

fn file_max_size(rule: &Rule<'_>, value: &FieldValue<'_>, path: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    FileMaxSize::parse(rule, path)?.validate(value, path)
}

fn unknown(_: &Rule<'_>, _: &FieldValue<'_>, _: &str, _: &[Field<'_>]) -> Result<(), RuleError> {
    Ok(())
}
