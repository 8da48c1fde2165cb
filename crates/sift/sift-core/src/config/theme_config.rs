//! Theme, variant, and dark-mode settings.
//!
//! None of these are interpreted by Sift. They are carried verbatim so that
//! `sift config` can hand a resolved configuration to the CSS build step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme overrides. `colors` replaces the palette; `extend.colors` adds to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeExtend {
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Look up a color name, preferring `extend.colors` over the base palette.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.extend
            .colors
            .get(name)
            .or_else(|| self.colors.get(name))
            .map(String::as_str)
    }
}

/// Variant settings, keyed by core plugin name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VariantsConfig {
    pub extend: BTreeMap<String, Vec<String>>,
}

/// Dark mode: either a plain flag or a strategy name such as `"media"` or `"class"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DarkMode {
    Flag(bool),
    Mode(String),
}

impl Default for DarkMode {
    fn default() -> Self {
        DarkMode::Flag(false)
    }
}

impl DarkMode {
    pub fn is_enabled(&self) -> bool {
        match self {
            DarkMode::Flag(enabled) => *enabled,
            DarkMode::Mode(mode) => !mode.is_empty(),
        }
    }
}
