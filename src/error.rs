//! Error types for tagsieve
//!
//! Errors surface at the host boundary: loading configuration, loading
//! the test manifest. Selection itself is infallible.

use thiserror::Error;

/// Errors raised at the host boundary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Failed to read test manifest {path}")]
    ManifestFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse test manifest {path}")]
    ManifestParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid test manifest {path}: {reason}")]
    ManifestValidationFailed { path: String, reason: String },
}

/// Shorthand for results carrying [`AppError`]
pub type AppResult<T> = Result<T, AppError>;
