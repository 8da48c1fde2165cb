//! # sift-analysis
//!
//! Token extraction for utility-CSS purging.
//! Contains the content token extractor, the content scanner that feeds it,
//! and the usage index a purger consults.

#![allow(clippy::module_inception)]

pub mod extractor;
pub mod scanner;
pub mod usage;

pub use extractor::{extract, ContentTokenExtractor, Extractor, ExtractorRegistry};
pub use scanner::{ScanResult, Scanner};
pub use usage::UsageIndex;
