// Built-in validators for string, scalar and sequence values

use crate::{Field, FieldValue, Rule, RuleError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

// Letter and digit classes by general category: Lu, Ll and Nd only.
static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Lu}").unwrap());
static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Ll}").unwrap());
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Nd}").unwrap());

/// Characters accepted as "special" by [`Password`].
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"|,.<>/?~";

/// Minimum length enforced by [`Password`].
pub const PASSWORD_MIN_LENGTH: i64 = 8;

/// Parse an integer rule parameter, naming the whole rule on failure.
pub(crate) fn parse_count(rule: &Rule<'_>, what: &'static str, field: &str) -> Result<i64, RuleError> {
    rule.param
        .parse::<i64>()
        .map_err(|e| RuleError::InvalidParam {
            what,
            rule: rule.raw.to_string(),
            field: field.to_string(),
            reason: e.to_string(),
        })
}

fn expect_str<'v>(value: &'v FieldValue<'_>, field: &str, purpose: &'static str) -> Result<&'v str, RuleError> {
    match value {
        FieldValue::Str(s) => Ok(*s),
        _ => Err(RuleError::NotAString {
            field: field.to_string(),
            purpose,
        }),
    }
}

fn char_count(s: &str) -> i64 {
    s.chars().count() as i64
}

/// `required`: non-empty for length kinds, non-zero otherwise.
pub struct Required;

impl Required {
    pub fn validate(value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let missing = match value {
            FieldValue::File(file) => file.is_none(),
            FieldValue::Scalar(scalar) => scalar.is_zero(),
            other => {
                return match other.len() {
                    Some(0) => Err(RuleError::Empty {
                        field: field.to_string(),
                    }),
                    _ => Ok(()),
                };
            }
        };

        if missing {
            Err(RuleError::ZeroValue {
                field: field.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// `min=N`: at least N characters.
pub struct MinLength(pub i64);

impl MinLength {
    pub fn validate(&self, value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let s = expect_str(value, field, "to validate min length")?;
        if char_count(s) < self.0 {
            Err(RuleError::TooShort {
                field: field.to_string(),
                min: self.0,
            })
        } else {
            Ok(())
        }
    }
}

/// `max=N`: at most N characters.
pub struct MaxLength(pub i64);

impl MaxLength {
    pub fn validate(&self, value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let s = expect_str(value, field, "to validate max length")?;
        if char_count(s) > self.0 {
            Err(RuleError::TooLong {
                field: field.to_string(),
                max: self.0,
            })
        } else {
            Ok(())
        }
    }
}

/// `email`
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let s = expect_str(value, field, "to validate as email")?;
        if EMAIL_REGEX.is_match(s) {
            Ok(())
        } else {
            Err(RuleError::InvalidEmail {
                field: field.to_string(),
            })
        }
    }
}

/// `password`: length first, then upper, lower, digit and special
/// character classes, reporting only the first missing one.
pub struct Password;

impl Password {
    pub fn validate(value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let s = expect_str(value, field, "to validate as password")?;
        let field = field.to_string();

        if char_count(s) < PASSWORD_MIN_LENGTH {
            return Err(RuleError::TooShort {
                field,
                min: PASSWORD_MIN_LENGTH,
            });
        }
        if !UPPERCASE_REGEX.is_match(s) {
            return Err(RuleError::MissingUppercase { field });
        }
        if !LOWERCASE_REGEX.is_match(s) {
            return Err(RuleError::MissingLowercase { field });
        }
        if !DIGIT_REGEX.is_match(s) {
            return Err(RuleError::MissingDigit { field });
        }
        if !s.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
            return Err(RuleError::MissingSpecial { field });
        }
        Ok(())
    }
}

/// `confirm=<Name>`: equal to the sibling string field `<Name>`.
pub struct Confirm<'t> {
    pub target: &'t str,
}

impl Confirm<'_> {
    pub fn validate(&self, value: &FieldValue<'_>, field: &str, siblings: &[Field<'_>]) -> Result<(), RuleError> {
        let s = expect_str(value, field, "for confirmation")?;
        if self.target.is_empty() {
            return Err(RuleError::ConfirmWithoutTarget {
                field: field.to_string(),
            });
        }

        let target = siblings
            .iter()
            .find(|f| f.name == self.target)
            .ok_or_else(|| RuleError::ConfirmTargetNotFound {
                field: field.to_string(),
                target: self.target.to_string(),
            })?;

        match &target.value {
            FieldValue::Str(other) if *other == s => Ok(()),
            FieldValue::Str(_) => Err(RuleError::Mismatch {
                field: field.to_string(),
                target: self.target.to_string(),
            }),
            _ => Err(RuleError::ConfirmTargetNotString {
                field: field.to_string(),
                target: self.target.to_string(),
            }),
        }
    }
}

/// `gt=N`: a sequence with more than N items.
pub struct MoreThan(pub i64);

impl MoreThan {
    pub fn validate(&self, value: &FieldValue<'_>, field: &str) -> Result<(), RuleError> {
        let len = match value {
            FieldValue::StrList(items) => items.len(),
            FieldValue::FileList(items) => items.len(),
            other => {
                return Err(RuleError::NotASequence {
                    rule: "gt",
                    kind: other.kind(),
                    field: field.to_string(),
                });
            }
        };

        if (len as i64) <= self.0 {
            Err(RuleError::TooFewItems {
                field: field.to_string(),
                count: self.0,
            })
        } else {
            Ok(())
        }
    }
}
