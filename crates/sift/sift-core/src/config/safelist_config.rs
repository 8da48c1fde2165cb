//! Classes kept regardless of whether any scanned file mentions them.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SafelistConfig {
    /// Exact class names.
    pub classes: Vec<String>,
    /// Regular expressions matched against candidate class names.
    pub patterns: Vec<String>,
}

impl SafelistConfig {
    /// Compile `patterns` into a `RegexSet`. `None` when there are no patterns.
    pub fn compile_patterns(&self) -> Result<Option<regex::RegexSet>, ConfigError> {
        if self.patterns.is_empty() {
            return Ok(None);
        }
        // Compile individually first so the error names the offending pattern.
        for pattern in &self.patterns {
            regex::Regex::new(pattern).map_err(|e| ConfigError::InvalidSafelistPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        regex::RegexSet::new(&self.patterns)
            .map(Some)
            .map_err(|e| ConfigError::InvalidSafelistPattern {
                pattern: self.patterns.join(", "),
                message: e.to_string(),
            })
    }
}
