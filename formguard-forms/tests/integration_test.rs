//! Integration tests for formguard-forms

use formguard_config::ConfigManager;
use formguard_forms::*;
use formguard_validation::FileHandle;

fn png(name: &str, size: i64) -> FileHandle {
    FileHandle::new(name, size).with_content_type("image/png")
}

fn upload_form(settings: FormSettings) -> FormResult<FormData> {
    let mut form = FormData::with_settings(settings);
    form.insert_value("title", "Moonrise");
    form.insert_value("author", "A. Writer");
    form.insert_value("category", "scifi");
    form.insert_file("cover", png("cover.png", 512))?;
    form.insert_file("previews[]", png("p1.png", 256))?;
    form.insert_file("archives[]", FileHandle::new("book.pdf", 1024).with_content_type("application/pdf"))?;
    Ok(form)
}

#[test]
fn test_upload_with_configured_limits() {
    let config = ConfigManager::new();
    config.set("max_memory", 4096).unwrap();
    config.set("max_files_per_field", 2).unwrap();
    let settings = FormSettings::from_config(&config).unwrap();

    let form = upload_form(settings).unwrap();
    let request: UploadRequest = FormPipe::parse(&form).unwrap();
    assert_eq!(request.title, "Moonrise");
    assert_eq!(request.archives.len(), 1);
}

#[test]
fn test_upload_over_memory_limit() {
    let settings = FormSettings {
        max_memory: 1000,
        ..FormSettings::default()
    };

    let err = upload_form(settings).unwrap_err();
    assert!(matches!(err, FormError::FileTooLarge { ref field, .. } if field == "archives[]"));
}

#[test]
fn test_empty_preview_part_is_reported_by_index() {
    let mut form = upload_form(FormSettings::default()).unwrap();
    form.insert_file("previews[]", FileHandle::new("", 0)).unwrap();

    let Err(FormError::Validation(report)) = FormPipe::parse::<UploadRequest>(&form) else {
        panic!("empty preview part must fail");
    };
    assert_eq!(report.len(), 1);
    assert_eq!(report.get("Previews[1]"), Some("Previews[1] is required (no file uploaded)"));
}

#[test]
fn test_wrong_cover_type() {
    let mut form = FormData::new();
    form.insert_value("title", "t");
    form.insert_value("author", "a");
    form.insert_value("category", "c");
    form.insert_file("cover", FileHandle::new("cover.gif", 10).with_content_type("image/gif"))
        .unwrap();
    form.insert_file("previews[]", png("p.png", 10)).unwrap();
    form.insert_file("archives[]", FileHandle::new("b.zip", 10).with_content_type("application/zip"))
        .unwrap();

    let Err(FormError::Validation(report)) = FormPipe::parse::<UploadRequest>(&form) else {
        panic!("gif cover must fail");
    };
    assert_eq!(
        report.get("Cover"),
        Some("file for Cover has an invalid type ('image/gif'). Allowed types are: image/png;image/jpeg;image/jpg;image/webp")
    );
}

#[test]
fn test_error_body_shape() {
    let report = match FormPipe::parse::<ProfileEmail>(&FormData::new()) {
        Err(FormError::Validation(report)) => report,
        other => panic!("expected validation error, got {:?}", other),
    };

    let body = FormPipe::error_body(&report);
    assert_eq!(
        body,
        serde_json::json!({
            "errors": {
                "Email": "Email is required and cannot be empty",
                "Password": "Password is required and cannot be empty",
                "RandomID": "RandomID is required and cannot be empty",
            }
        })
    );
}
