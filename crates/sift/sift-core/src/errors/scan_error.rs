//! Content scanner errors.

use std::path::PathBuf;

use super::error_code::{self, SiftErrorCode};

/// Errors that abort a scan. Per-file failures are logged and skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Invalid content pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Walk failed: {0}")]
    Walk(String),
}

impl SiftErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => error_code::SCAN_ROOT_NOT_FOUND,
            Self::InvalidPattern { .. } => error_code::SCAN_INVALID_PATTERN,
            Self::Walk(_) => error_code::SCAN_WALK_ERROR,
        }
    }
}
