//! Content extractors: turn the text of a scanned file into candidate class tokens.

pub mod content_tokens;
pub mod registry;

pub use content_tokens::{extract, ContentTokenExtractor};
pub use registry::ExtractorRegistry;

/// A per-file extraction hook.
///
/// Implementations must be pure: the scanner calls them concurrently from
/// many threads with nothing but the file contents.
pub trait Extractor: Send + Sync {
    /// Stable identifier, used in logs.
    fn id(&self) -> &str;

    /// Candidate tokens in `content`, in the order the extractor produces them.
    fn extract(&self, content: &str) -> Vec<String>;
}
