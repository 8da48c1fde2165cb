pub mod defaults;
pub mod safelist_config;
pub mod scan_config;
pub mod theme_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use safelist_config::SafelistConfig;
pub use scan_config::ScanConfig;
pub use theme_config::{DarkMode, ThemeConfig, ThemeExtend, VariantsConfig};

/// Top-level configuration, one `sift.toml` per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Content globs selecting the files to scan.
    pub content: Vec<String>,
    pub plugins: Vec<String>,
    pub dark_mode: DarkMode,
    pub theme: ThemeConfig,
    pub variants: VariantsConfig,
    pub safelist: SafelistConfig,
    pub scan: ScanConfig,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            content: defaults::default_content(),
            plugins: Vec::new(),
            dark_mode: DarkMode::default(),
            theme: ThemeConfig::default(),
            variants: VariantsConfig::default(),
            safelist: SafelistConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl SiftConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), globs = config.content.len(), "config loaded");
        Ok(config)
    }

    /// Load `sift.toml` from `root` if present, otherwise use defaults.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let candidate = root.join(defaults::CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!(root = %root.display(), "no config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Content globs with any leading `./` removed, ready for the walker.
    pub fn normalized_content(&self) -> Vec<String> {
        self.content.iter().map(|g| normalize_glob(g)).collect()
    }

    /// Check that the content globs and safelist patterns are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::EmptyContent);
        }
        for pattern in &self.content {
            glob::Pattern::new(&normalize_glob(pattern)).map_err(|e| {
                ConfigError::InvalidGlob {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        self.safelist.compile_patterns()?;
        Ok(())
    }
}

/// Strip a leading `./` so globs read as root-relative gitignore patterns.
pub fn normalize_glob(pattern: &str) -> String {
    let mut trimmed = pattern.trim();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.to_string()
}
