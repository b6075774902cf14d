//! Fuzz target for upload type matching.
//!
//! An allowed list must accept any file declared with one of its non-empty entries.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use formguard_validation::{FileHandle, FileTypes};

#[derive(Debug, Arbitrary)]
struct FuzzUpload {
    allowed: String,
    filename: String,
    content_type: String,
    size: i64,
}

fuzz_target!(|data: FuzzUpload| {
    let rule = FileTypes::parse(&data.allowed);
    let file = FileHandle::new(data.filename.clone(), data.size).with_content_type(data.content_type.clone());
    let _ = rule.accepts(&file);
    let _ = file.extension();

    // An empty declared type skips the prefix check, so empty entries are not covered.
    for entry in rule.allowed.iter().filter(|entry| !entry.is_empty()) {
        let declared = FileHandle::new(data.filename.clone(), data.size).with_content_type(entry.clone());
        assert!(rule.accepts(&declared));
    }
});
