// Record validation

use crate::dispatch::apply;
use crate::{Field, FieldValue, Record, Rule, RuleError, RuleSet, Validatable, ValidationReport, DIVE};
use formguard_log::{debug, trace};

/// Validate `input` against the rules annotated on its fields.
///
/// Returns `Ok(())` when every rule passes. Otherwise the report maps each
/// failing path (`Email`, `Previews[1]`, ...) to the first message produced
/// for it. Input that is not a record yields a single `_struct` entry.
///
/// ```
/// use formguard_validation::validate;
///
/// let report = validate(&42).unwrap_err();
/// assert_eq!(report.get("_struct"), Some("Invalid argument: input must be a record."));
/// ```
pub fn validate<T: Validatable + ?Sized>(input: &T) -> Result<(), ValidationReport> {
    match input.as_record() {
        Some(record) => validate_record(record),
        None => {
            debug!("Rejected non-record input");
            Err(ValidationReport::not_a_record())
        }
    }
}

pub(crate) fn validate_record(record: &dyn Record) -> Result<(), ValidationReport> {
    let fields = record.fields();
    let mut report = ValidationReport::new();

    for field in &fields {
        let Some(annotation) = field.rules else {
            continue;
        };
        let rules = RuleSet::parse(annotation);
        if rules.is_empty() {
            continue;
        }
        check_field(field, &rules, &fields, &mut report);
    }

    debug!(
        "Validated {} fields: {} failing paths",
        fields.len(),
        report.len()
    );
    report.into_result()
}

fn check_field(field: &Field<'_>, rules: &RuleSet<'_>, siblings: &[Field<'_>], report: &mut ValidationReport) {
    let name = field.name;

    if !rules.dive {
        if let Err((rule, error)) = first_failure(&rules.container, &field.value, name, siblings) {
            report.record(name, rule, &error);
        }
        return;
    }

    let Some(elements) = field.value.elements() else {
        let error = RuleError::DiveRequiresSequence {
            field: name.to_string(),
            kind: field.value.kind(),
        };
        report.record(name, DIVE, &error);
        return;
    };

    // Element rules only run once the sequence itself is acceptable.
    if let Err((rule, error)) = first_failure(&rules.container, &field.value, name, siblings) {
        report.record(name, rule, &error);
        return;
    }

    for (index, element) in elements.iter().enumerate() {
        let path = format!("{}[{}]", name, index);
        if let Err((rule, error)) = first_failure(&rules.elements, element, &path, siblings) {
            report.record(&path, rule, &error);
        }
    }
}

/// Run `rules` in order and stop at the first failure.
fn first_failure<'r>(
    rules: &'r [Rule<'_>],
    value: &FieldValue<'_>,
    path: &str,
    siblings: &[Field<'_>],
) -> Result<(), (&'r str, RuleError)> {
    for rule in rules {
        if let Err(error) = apply(rule, value, path, siblings) {
            trace!("{} failed '{}': {}", path, rule, error);
            return Err((rule.name, error));
        }
    }
    Ok(())
}
