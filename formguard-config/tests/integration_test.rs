//! Integration tests for formguard-config

use formguard_config::*;
use serde::Deserialize;
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_file() {
    let file = write_temp(".toml", "max_memory = 1048576\nmax_files_per_field = 8\n");

    let manager = ConfigManager::new();
    manager.load_file(file.path(), FileFormat::Toml).unwrap();

    assert_eq!(manager.get::<u64>("max_memory").unwrap(), 1_048_576);
    assert_eq!(manager.get::<usize>("max_files_per_field").unwrap(), 8);
}

#[test]
fn test_load_json_file_auto_format() {
    let file = write_temp(".json", r#"{"label": "covers"}"#);

    let loader = ConfigLoader::auto(file.path()).unwrap();
    let value = loader.load_file(file.path()).unwrap();
    assert_eq!(value["label"], "covers");
}

#[test]
fn test_missing_file_is_load_error() {
    let manager = ConfigManager::new();
    let result = manager.load_file("/nonexistent/formguard.toml", FileFormat::Toml);
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_missing_dotenv_path_is_error() {
    let manager = ConfigManager::with_prefix("FORMGUARD_IT");
    let result = manager.load_dotenv(Some(std::path::Path::new("/nonexistent/.env")));
    assert!(result.is_err());
}

#[derive(Debug, Deserialize)]
struct UploadLimits {
    max_memory: u64,
    max_files_per_field: usize,
}

impl ValidateConfig for UploadLimits {
    fn validate(&self) -> Result<()> {
        ConfigValidator::positive(self.max_memory, "max_memory")?;
        ConfigValidator::in_range(self.max_files_per_field, 1, 64, "max_files_per_field")
    }
}

#[test]
fn test_env_style_file_loads_validated_struct() {
    let file = write_temp(".env", "MAX_MEMORY=4096\nMAX_FILES_PER_FIELD=2\n");

    let manager = ConfigManager::new();
    manager.load_file(file.path(), FileFormat::Env).unwrap();

    let limits: UploadLimits = manager.load_validated().unwrap();
    assert_eq!(limits.max_memory, 4096);
    assert_eq!(limits.max_files_per_field, 2);
}

#[test]
fn test_validated_struct_rejects_out_of_range() {
    let manager = ConfigManager::new();
    manager.set("max_memory", 10).unwrap();
    manager.set("max_files_per_field", 500).unwrap();

    let err = manager.load_validated::<UploadLimits>().unwrap_err();
    assert!(err.to_string().contains("max_files_per_field"));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::KeyNotFound("max_memory".to_string());
    assert_eq!(err.to_string(), "setting 'max_memory' is not set");
}
