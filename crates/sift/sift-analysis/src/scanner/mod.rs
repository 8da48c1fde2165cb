//! Content scanner: discover the files selected by the content globs and run
//! the extractor over each one.

pub mod cancellation;
pub mod scanner;
pub mod types;
pub mod walker;

pub use cancellation::ScanCancellation;
pub use scanner::Scanner;
pub use types::{DiscoveredFile, FileTokens, ScanResult, ScanStats};
