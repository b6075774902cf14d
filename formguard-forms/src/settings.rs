// Form limits

use formguard_config::{ConfigManager, ConfigValidator, Result, ValidateConfig};
use serde::{Deserialize, Serialize};

/// Environment prefix for [`FormSettings::from_env`].
pub const ENV_PREFIX: &str = "FORMGUARD";

/// Limits applied while files are attached to a [`crate::FormData`].
///
/// Read from `FORMGUARD_MAX_MEMORY` and `FORMGUARD_MAX_FILES_PER_FIELD`,
/// or from any [`ConfigManager`] holding `max_memory` / `max_files_per_field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Total bytes of attached files a form may hold
    pub max_memory: u64,
    /// Files accepted under one field name
    pub max_files_per_field: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_memory: 10 << 20,
            max_files_per_field: 32,
        }
    }
}

impl ValidateConfig for FormSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::positive(self.max_memory, "max_memory")?;
        ConfigValidator::in_range(self.max_files_per_field, 1, 1024, "max_files_per_field")
    }
}

impl FormSettings {
    /// Typed, validated settings from a loaded configuration.
    pub fn from_config(config: &ConfigManager) -> Result<Self> {
        config.load_validated()
    }

    /// Settings from `FORMGUARD_*` environment variables, defaults elsewhere.
    pub fn from_env() -> Result<Self> {
        let config = ConfigManager::with_prefix(ENV_PREFIX);
        config.load_env()?;
        Self::from_config(&config)
    }
}
