//! Parallel file walker using the `ignore` crate's `WalkParallel`.
//!
//! `.gitignore`, `.siftignore`, the default ignore directories and
//! `scan.extra_ignore` prune the walk first. The content globs then select
//! among the files that survive it.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel as channel;
use sift_core::config::defaults::IGNORE_FILE_NAME;
use sift_core::config::ScanConfig;
use sift_core::errors::ScanError;

use super::types::DiscoveredFile;

/// Directories never scanned, whatever the content globs say.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "target",
    ".shadow-cljs",
    ".cpcache",
    ".lsp",
    ".clj-kondo",
    "coverage",
    ".venv",
];

/// Walk `root` and return every file matched by `content_globs`.
///
/// Globs use gitignore syntax relative to `root` (leading `./` already removed).
/// Returns files sorted by path for deterministic output.
pub fn walk_content(
    root: &Path,
    content_globs: &[String],
    config: &ScanConfig,
    cancelled: &AtomicBool,
) -> Result<Vec<DiscoveredFile>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    // No globs select no files.
    if content_globs.is_empty() {
        return Ok(Vec::new());
    }

    let (tx, rx) = channel::unbounded();

    let threads = config.effective_threads();
    let respect_gitignore = config.effective_respect_gitignore();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .require_git(false)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .max_filesize(Some(config.effective_max_file_size()))
        .follow_links(config.follow_symlinks.unwrap_or(false));

    if threads > 0 {
        builder.threads(threads);
    }

    // Overrides beat ignore files in `ignore`, so only negated globs go in as
    // overrides. The content globs are matched per entry in the visitor.
    let content_matcher = build_content_matcher(root, content_globs)?;

    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    for dir in DEFAULT_IGNORES {
        add_negated(&mut overrides, &format!("{}/**", dir))?;
        add_negated(&mut overrides, dir)?;
    }
    for pattern in &config.extra_ignore {
        add_negated(&mut overrides, pattern)?;
    }
    let built = overrides
        .build()
        .map_err(|e| ScanError::Walk(e.to_string()))?;
    builder.overrides(built);

    let walker = builder.build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        let content_matcher = &content_matcher;
        Box::new(move |entry| {
            if cancelled.load(Ordering::Relaxed) {
                return ignore::WalkState::Quit;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "walk entry error");
                    return ignore::WalkState::Continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }
            if !content_matcher.matched(entry.path(), false).is_whitelist() {
                return ignore::WalkState::Continue;
            }

            let file_size = match entry.metadata() {
                Ok(m) => m.len(),
                Err(_) => return ignore::WalkState::Continue,
            };

            let _ = tx.send(DiscoveredFile {
                path: entry.into_path(),
                file_size,
            });

            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<DiscoveredFile> = rx.into_iter().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Compile the content globs into a whitelist matcher rooted at `root`.
fn build_content_matcher(
    root: &Path,
    content_globs: &[String],
) -> Result<ignore::overrides::Override, ScanError> {
    let mut matcher = ignore::overrides::OverrideBuilder::new(root);
    for pattern in content_globs {
        matcher
            .add(pattern)
            .map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }
    matcher.build().map_err(|e| ScanError::Walk(e.to_string()))
}

fn add_negated(
    overrides: &mut ignore::overrides::OverrideBuilder,
    pattern: &str,
) -> Result<(), ScanError> {
    overrides
        .add(&format!("!{}", pattern))
        .map(|_| ())
        .map_err(|e| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
