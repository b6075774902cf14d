//! Integration tests for form handling through the facade crate.

use formguard::formguard_config::{ConfigManager, FileFormat};
use formguard::prelude::*;
use formguard::formguard_forms::{Avatar, Signup, UploadRequest};
use std::io::Write;

fn settings_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_settings_from_toml_file() {
    let file = settings_file("max_memory = 2048\nmax_files_per_field = 2\n");
    let config = ConfigManager::new();
    config.load_file(file.path(), FileFormat::Toml).unwrap();

    let settings = FormSettings::from_config(&config).unwrap();
    assert_eq!(settings.max_memory, 2048);

    let mut form = FormData::with_settings(settings);
    form.insert_file("previews[]", FileHandle::new("a.png", 10)).unwrap();
    form.insert_file("previews[]", FileHandle::new("b.png", 10)).unwrap();
    assert!(matches!(
        form.insert_file("previews[]", FileHandle::new("c.png", 10)),
        Err(FormError::TooManyFiles { max: 2, .. })
    ));
}

#[test]
fn test_invalid_settings_file() {
    let file = settings_file("max_files_per_field = 0\n");
    let config = ConfigManager::new();
    config.load_file(file.path(), FileFormat::Toml).unwrap();

    assert!(FormSettings::from_config(&config).is_err());
}

#[test]
fn test_signup_workflow() {
    let form = FormData::new()
        .value_part("email", "not-an-email")
        .value_part("username", "ab")
        .value_part("password", "password")
        .value_part("confirm", "password");

    let Err(FormError::Validation(report)) = FormPipe::parse::<Signup>(&form) else {
        panic!("signup must fail");
    };

    let body = FormPipe::error_body(&report);
    assert_eq!(
        body,
        serde_json::json!({
            "errors": {
                "Email": "Email is not a valid email",
                "Username": "Username must be at least 3 characters long",
                "Password": "Password must contain at least one uppercase letter",
            }
        })
    );
}

#[test]
fn test_avatar_workflow() {
    let form = FormData::new()
        .value_part("randomId", "r-42")
        .file_part("avatar", FileHandle::new("me.png", 4096).with_content_type("image/png"))
        .unwrap();

    let avatar: Avatar = FormPipe::parse(&form).unwrap();
    assert_eq!(avatar.random_id, "r-42");
}

#[test]
fn test_upload_workflow_reports_each_bad_archive() {
    let form = FormData::new()
        .value_part("title", "Moonrise")
        .value_part("author", "A. Writer")
        .value_part("category", "scifi")
        .file_part("cover", FileHandle::new("cover.png", 10).with_content_type("image/png"))
        .and_then(|f| f.file_part("previews[]", FileHandle::new("p.png", 10).with_content_type("image/png")))
        .and_then(|f| f.file_part("archives[]", FileHandle::new("a.exe", 10).with_content_type("application/x-msdownload")))
        .and_then(|f| f.file_part("archives[]", FileHandle::new("b.pdf", 10).with_content_type("application/pdf")))
        .and_then(|f| f.file_part("archives[]", FileHandle::new("c.sh", 10).with_content_type("text/x-sh")))
        .unwrap();

    let Err(FormError::Validation(report)) = FormPipe::parse::<UploadRequest>(&form) else {
        panic!("upload must fail");
    };
    assert_eq!(report.paths().collect::<Vec<_>>(), vec!["Archives[0]", "Archives[2]"]);
}
