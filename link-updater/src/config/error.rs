//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse YAML configuration '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML configuration '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the configuration.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing configuration file.
    #[error("Configuration file not found: {path}")]
    MissingFile { path: String },
}
