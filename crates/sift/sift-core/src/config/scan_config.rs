//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the content scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Number of walker threads. 0 = let `ignore` pick.
    pub threads: Option<usize>,
    /// Additional ignore patterns beyond .gitignore/.siftignore.
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Skip files that are not valid UTF-8. Default: true.
    pub skip_binary: Option<bool>,
    /// Respect .gitignore files. Default: true.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_skip_binary(&self) -> bool {
        self.skip_binary.unwrap_or(true)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(true)
    }
}
