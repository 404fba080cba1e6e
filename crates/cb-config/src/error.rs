//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A required input path is not configured.
    #[error("Input '{input}' is not configured (set inputs.{input} or pass --{input})")]
    MissingInput { input: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

