use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or resolving settings.
///
/// All of them are fatal at startup. Lookups in the instrument and market registries do not
/// use this type: a miss there is an `Option::None`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required field is missing or has the wrong type.
    #[error("Malformed {what} configuration: {source}")]
    Malformed {
        what: &'static str,
        source: serde_json::Error,
    },

    /// The document is well-formed but inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A settings lookup named an exchange that was never configured.
    #[error("Unknown exchange {0:?}")]
    UnknownExchange(String),
}

/// A specialized Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
