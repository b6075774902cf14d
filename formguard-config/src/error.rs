// Errors raised while loading or reading form settings

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No source supplied a value for the key.
    #[error("setting '{0}' is not set")]
    KeyNotFound(String),

    #[error("could not load settings: {0}")]
    LoadError(String),

    #[error("could not parse settings: {0}")]
    ParseError(String),

    /// A loaded value was rejected by `ValidateConfig`.
    #[error("invalid setting: {0}")]
    ValidationError(String),

    #[error("could not encode setting: {0}")]
    SerializationError(String),

    #[error("could not decode setting: {0}")]
    DeserializationError(String),

    #[error("settings file unreadable: {0}")]
    IoError(#[from] std::io::Error),

    #[error("environment variable unusable: {0}")]
    EnvError(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
