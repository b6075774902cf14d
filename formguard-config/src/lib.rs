//! Configuration management for formguard.
//!
//! Values from environment variables, `.env` files and JSON/TOML files are
//! merged into one key/value store and read back either one key at a time
//! or as a whole typed, validated settings struct.
//!
//! ```
//! use formguard_config::ConfigManager;
//!
//! let config = ConfigManager::new();
//! config.set("max_memory", 4096u64).unwrap();
//! assert_eq!(config.get::<u64>("max_memory").unwrap(), 4096);
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, ValidateConfig};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, thread-safe configuration store.
#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<HashMap<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only environment variables starting with `<prefix>_` are loaded.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config: Arc::default(),
            env_prefix: Some(prefix.into()),
        }
    }

    // A panic while holding the lock leaves plain data behind; keep using it.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn load_env(&self) -> Result<()> {
        let vars = EnvLoader::new(self.env_prefix.clone()).load()?;

        let mut config = self.write();
        for (key, value) in vars {
            config.insert(key, Value::String(value));
        }

        Ok(())
    }

    /// Load a `.env` file into the process environment, then [`Self::load_env`].
    ///
    /// Without a path a missing `.env` in the working directory is ignored.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        self.load_env()
    }

    /// Merge the top-level keys of a configuration file.
    pub fn load_file(&self, path: impl AsRef<Path>, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).load_file(path)?;
        self.merge_value(data)
    }

    fn merge_value(&self, data: Value) -> Result<()> {
        match data {
            Value::Object(map) => {
                let mut config = self.write();
                config.extend(map);
                Ok(())
            }
            other => Err(ConfigError::ParseError(format!(
                "expected a table of settings, found {}",
                other
            ))),
        }
    }

    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        self.write().insert(key.to_string(), json_value);
        Ok(())
    }

    /// Typed read. Strings holding numbers or booleans (as environment
    /// variables always do) are accepted for numeric and boolean targets.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        from_value_lenient(key, value)
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Copy every key of `other` into this store, overwriting duplicates.
    pub fn merge(&self, other: &ConfigManager) {
        let entries: Vec<(String, Value)> = other
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.write().extend(entries);
    }

    /// Deserialize the whole store into `T` and run its checks.
    pub fn load_validated<T: DeserializeOwned + ValidateConfig>(&self) -> Result<T> {
        let object: serde_json::Map<String, Value> = self
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), coerce_scalar(v.clone())))
            .collect();

        let settings: T = serde_json::from_value(Value::Object(object))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }
}

fn from_value_lenient<T: DeserializeOwned>(key: &str, value: Value) -> Result<T> {
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(first) => serde_json::from_value(coerce_scalar(value))
            .map_err(|_| ConfigError::DeserializationError(format!("{}: {}", key, first))),
    }
}

// Environment values arrive as strings; reinterpret obvious numbers and booleans.
fn coerce_scalar(value: Value) -> Value {
    let Value::String(raw) = &value else {
        return value;
    };
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Value::from(n);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    match trimmed.to_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => value,
    }
}
