//! Scanner data types.

use std::path::PathBuf;

use serde::Serialize;
use sift_core::FxHashSet;

/// A file selected by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub file_size: u64,
}

/// Extractor output for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTokens {
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub extractor: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_discovered: usize,
    /// Summed size of the discovered files, as reported by the walker.
    pub bytes_discovered: u64,
    pub files_extracted: usize,
    pub files_skipped_binary: usize,
    pub files_skipped_unreadable: usize,
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub discovery_ms: u64,
    pub extraction_ms: u64,
    pub cancelled: bool,
}

/// Everything a scan produced. `files` is sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub files: Vec<FileTokens>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// Every token from every file, in file order then extraction order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .flat_map(|f| f.tokens.iter().map(String::as_str))
    }

    /// Deduplicated tokens, sorted.
    pub fn unique_tokens(&self) -> Vec<String> {
        let set: FxHashSet<&str> = self.tokens().collect();
        let mut unique: Vec<String> = set.into_iter().map(str::to_string).collect();
        unique.sort_unstable();
        unique
    }

    pub fn file(&self, path: &std::path::Path) -> Option<&FileTokens> {
        self.files.iter().find(|f| f.path == path)
    }
}
