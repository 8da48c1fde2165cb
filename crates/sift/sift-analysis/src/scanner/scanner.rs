//! Top-level Scanner struct orchestrating walker → read → extract.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use sift_core::config::{ScanConfig, SiftConfig};
use sift_core::errors::ScanError;
use sift_core::FxHashSet;

use super::cancellation::ScanCancellation;
use super::types::{DiscoveredFile, FileTokens, ScanResult, ScanStats};
use super::walker;
use crate::extractor::ExtractorRegistry;

/// The scanner that turns a project tree into per-file token lists.
pub struct Scanner {
    content: Vec<String>,
    config: ScanConfig,
    registry: ExtractorRegistry,
    cancellation: ScanCancellation,
}

enum FileOutcome {
    Extracted(FileTokens),
    Binary,
    Unreadable,
}

impl Scanner {
    /// Create a scanner for the content globs and scan settings in `config`.
    pub fn new(config: &SiftConfig) -> Self {
        Self::with_registry(config, ExtractorRegistry::new())
    }

    /// Create a scanner that routes files through `registry`.
    pub fn with_registry(config: &SiftConfig, registry: ExtractorRegistry) -> Self {
        Self {
            content: config.normalized_content(),
            config: config.scan.clone(),
            registry,
            cancellation: ScanCancellation::new(),
        }
    }

    /// Get a reference to the cancellation handle for external cancellation.
    pub fn cancellation(&self) -> &ScanCancellation {
        &self.cancellation
    }

    /// Scan `root`. A cancelled scan returns whatever was extracted so far.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        self.cancellation.reset();

        // Phase 1: Discovery
        let discovery_start = Instant::now();
        let files = walker::walk_content(
            root,
            &self.content,
            &self.config,
            self.cancellation.as_atomic(),
        )?;
        let discovery_ms = discovery_start.elapsed().as_millis() as u64;
        tracing::debug!(
            root = %root.display(),
            files = files.len(),
            "discovery complete"
        );

        // Phase 2: Read + extract
        let extraction_start = Instant::now();
        let skip_binary = self.config.effective_skip_binary();
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .filter_map(|file| {
                if self.cancellation.is_cancelled() {
                    return None;
                }
                Some(self.process_file(root, file, skip_binary))
            })
            .collect();
        let extraction_ms = extraction_start.elapsed().as_millis() as u64;

        let mut stats = ScanStats {
            files_discovered: files.len(),
            bytes_discovered: files.iter().map(|f| f.file_size).sum(),
            discovery_ms,
            extraction_ms,
            cancelled: self.cancellation.is_cancelled(),
            ..ScanStats::default()
        };

        let mut extracted = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                FileOutcome::Extracted(tokens) => extracted.push(tokens),
                FileOutcome::Binary => stats.files_skipped_binary += 1,
                FileOutcome::Unreadable => stats.files_skipped_unreadable += 1,
            }
        }
        // par_iter preserves order, but keep the contract explicit.
        extracted.sort_by(|a, b| a.path.cmp(&b.path));

        let mut unique = FxHashSet::default();
        for file in &extracted {
            stats.total_tokens += file.tokens.len();
            unique.extend(file.tokens.iter().map(String::as_str));
        }
        stats.unique_tokens = unique.len();
        stats.files_extracted = extracted.len();

        tracing::info!(
            files = stats.files_extracted,
            bytes = stats.bytes_discovered,
            tokens = stats.total_tokens,
            unique = stats.unique_tokens,
            skipped_binary = stats.files_skipped_binary,
            skipped_unreadable = stats.files_skipped_unreadable,
            cancelled = stats.cancelled,
            "scan complete"
        );

        Ok(ScanResult {
            files: extracted,
            stats,
        })
    }

    fn process_file(&self, root: &Path, file: &DiscoveredFile, skip_binary: bool) -> FileOutcome {
        let bytes = match std::fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                // Non-fatal: skip file, continue scanning
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "file read error"
                );
                return FileOutcome::Unreadable;
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) if skip_binary => {
                tracing::debug!(path = %file.path.display(), "skipping non-UTF-8 file");
                return FileOutcome::Binary;
            }
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        let extractor = self.registry.for_path(&file.path);
        let tokens = extractor.extract(&content);
        tracing::debug!(
            path = %file.path.display(),
            extractor = extractor.id(),
            tokens = tokens.len(),
            "extracted"
        );

        let relative = file
            .path
            .strip_prefix(root)
            .unwrap_or(&file.path)
            .to_path_buf();

        FileOutcome::Extracted(FileTokens {
            path: relative,
            extractor: extractor.id().to_string(),
            tokens,
        })
    }
}
