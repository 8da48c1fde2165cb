//! Class usage index.
//!
//! Collapses extractor output into a set and answers the only question a
//! purger asks: is this class mentioned anywhere (or safelisted)?

use regex::RegexSet;
use sift_core::config::SafelistConfig;
use sift_core::errors::ConfigError;
use sift_core::FxHashSet;

use crate::scanner::ScanResult;

#[derive(Debug, Clone, Default)]
pub struct UsageIndex {
    tokens: FxHashSet<String>,
    safelist: FxHashSet<String>,
    safelist_patterns: Option<RegexSet>,
}

impl UsageIndex {
    /// Build from a scan, honouring the configured safelist.
    pub fn from_scan(scan: &ScanResult, safelist: &SafelistConfig) -> Result<Self, ConfigError> {
        Self::from_tokens(scan.tokens()).with_safelist(safelist)
    }

    /// Build from raw tokens with an empty safelist.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_safelist(mut self, safelist: &SafelistConfig) -> Result<Self, ConfigError> {
        self.safelist.extend(safelist.classes.iter().cloned());
        self.safelist_patterns = safelist.compile_patterns()?;
        Ok(self)
    }

    pub fn is_used(&self, class: &str) -> bool {
        self.tokens.contains(class)
            || self.safelist.contains(class)
            || self
                .safelist_patterns
                .as_ref()
                .is_some_and(|set| set.is_match(class))
    }

    /// Classes from `classes` that are used, in input order.
    pub fn retain_used<'a, I>(&self, classes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        classes
            .into_iter()
            .filter(|c| self.is_used(c))
            .map(str::to_string)
            .collect()
    }

    /// Classes from `classes` that are not used, in input order.
    pub fn unused<'a, I>(&self, classes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        classes
            .into_iter()
            .filter(|c| !self.is_used(c))
            .map(str::to_string)
            .collect()
    }

    /// Number of distinct extracted tokens (safelist not counted).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Distinct extracted tokens, sorted.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.tokens.iter().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}
