//! Per-extension extractor selection.

use std::path::Path;
use std::sync::Arc;

use sift_core::FxHashMap;

use super::{ContentTokenExtractor, Extractor};

/// Maps file extensions to extractors, falling back to [`ContentTokenExtractor`].
#[derive(Clone)]
pub struct ExtractorRegistry {
    by_extension: FxHashMap<String, Arc<dyn Extractor>>,
    default: Arc<dyn Extractor>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::with_default(Arc::new(ContentTokenExtractor::new()))
    }

    pub fn with_default(default: Arc<dyn Extractor>) -> Self {
        Self {
            by_extension: FxHashMap::default(),
            default,
        }
    }

    /// Route files with any of `extensions` (without the dot, case-insensitive) to `extractor`.
    pub fn register(&mut self, extensions: &[&str], extractor: Arc<dyn Extractor>) {
        for ext in extensions {
            let key = ext.trim_start_matches('.').to_ascii_lowercase();
            self.by_extension.insert(key, Arc::clone(&extractor));
        }
    }

    /// The extractor that handles `path`.
    pub fn for_path(&self, path: &Path) -> &dyn Extractor {
        let extractor = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.by_extension.get(&e.to_ascii_lowercase()))
            .unwrap_or(&self.default);
        Arc::as_ref(extractor)
    }

    pub fn extract_file(&self, path: &Path, content: &str) -> Vec<String> {
        self.for_path(path).extract(content)
    }

    /// Number of extension-specific registrations.
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut extensions: Vec<_> = self
            .by_extension
            .iter()
            .map(|(ext, ex)| (ext.as_str(), ex.id()))
            .collect();
        extensions.sort_unstable();
        f.debug_struct("ExtractorRegistry")
            .field("by_extension", &extensions)
            .field("default", &self.default.id())
            .finish()
    }
}
