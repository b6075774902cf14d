//! Fuzz target for rule annotations.
//!
//! Parses arbitrary annotations and evaluates every resulting rule against
//! arbitrary values. Evaluation must report failures, never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use formguard_validation::{apply, Field, FieldValue, RuleSet};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    annotation: String,
    text: String,
    items: Vec<String>,
    sibling: String,
}

fuzz_target!(|data: FuzzInput| {
    let rules = RuleSet::parse(&data.annotation);

    if !rules.dive {
        assert!(rules.elements.is_empty());
    }

    let siblings = [Field::new("Password", None, FieldValue::Str(&data.sibling))];
    let values = [
        FieldValue::Str(&data.text),
        FieldValue::StrList(data.items.iter().map(String::as_str).collect()),
        FieldValue::File(None),
    ];

    for rule in rules.container.iter().chain(&rules.elements) {
        for value in &values {
            if let Err(err) = apply(rule, value, "Field", &siblings) {
                assert!(!err.to_string().is_empty());
            }
        }
    }
});
