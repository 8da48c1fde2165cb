//! # sift-core
//!
//! Foundation crate for Sift.
//! Defines config, errors, tracing setup, and shared collection types.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SiftConfig;
pub use errors::error_code::SiftErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
