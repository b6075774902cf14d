// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Reads environment variables, optionally restricted to a prefix.
///
/// With prefix `FORMGUARD`, the variable `FORMGUARD_MAX_MEMORY` is exposed
/// under the key `max_memory`.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// All matching variables, keyed by their lower-cased, prefix-less name.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        Ok(self.collect(env::vars()))
    }

    fn collect(&self, vars: impl Iterator<Item = (String, String)>) -> HashMap<String, String> {
        vars.filter_map(|(key, value)| match &self.prefix {
            Some(prefix) => key
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .filter(|rest| !rest.is_empty())
                .map(|rest| (rest.to_lowercase(), value)),
            None => Some((key.to_lowercase(), value)),
        })
        .collect()
    }

    /// Full variable name for a key, prefix applied.
    pub fn var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.var_name(key)).map_err(ConfigError::EnvError)
    }

    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_is_stripped_and_lowercased() {
        let loader = EnvLoader::new(Some("FORMGUARD".to_string()));
        let vars = pairs(&[
            ("FORMGUARD_MAX_MEMORY", "1024"),
            ("FORMGUARDIAN_OTHER", "x"),
            ("FORMGUARD_", "empty"),
            ("PATH", "/bin"),
        ]);

        let loaded = loader.collect(vars.into_iter());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("max_memory"), Some(&"1024".to_string()));
    }

    #[test]
    fn test_no_prefix_keeps_everything() {
        let loader = EnvLoader::default();
        let loaded = loader.collect(pairs(&[("HOME", "/root"), ("Lang", "C")]).into_iter());
        assert_eq!(loaded.get("home"), Some(&"/root".to_string()));
        assert_eq!(loaded.get("lang"), Some(&"C".to_string()));
    }

    #[test]
    fn test_var_name() {
        let loader = EnvLoader::new(Some("FORMGUARD".to_string()));
        assert_eq!(loader.var_name("max_memory"), "FORMGUARD_MAX_MEMORY");
        assert_eq!(EnvLoader::default().var_name("port"), "PORT");
    }

    #[test]
    fn test_missing_var_falls_back() {
        let loader = EnvLoader::new(Some("FORMGUARD_TEST".to_string()));
        assert!(loader.load_var("MISSING_VAR_67890").is_err());
        assert_eq!(loader.load_var_or("MISSING_VAR_67890", "fallback"), "fallback");
    }
}
