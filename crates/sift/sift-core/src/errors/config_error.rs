//! Configuration loading and validation errors.

use std::path::PathBuf;

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while loading or validating a `SiftConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid content glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Invalid safelist pattern '{pattern}': {message}")]
    InvalidSafelistPattern { pattern: String, message: String },

    #[error("No content globs configured; nothing would be scanned")]
    EmptyContent,
}

impl SiftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Serialize(_) => error_code::CONFIG_SERIALIZE,
            Self::InvalidGlob { .. } => error_code::INVALID_GLOB,
            Self::InvalidSafelistPattern { .. } => error_code::INVALID_SAFELIST_PATTERN,
            Self::EmptyContent => error_code::EMPTY_CONTENT,
        }
    }
}
