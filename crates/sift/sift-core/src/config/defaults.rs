//! Default values and the `sift init` template.

/// File name looked up in the scan root when no config path is given.
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Custom ignore file honoured by the walker (gitignore syntax).
pub const IGNORE_FILE_NAME: &str = ".siftignore";

/// Content globs used when a config omits `content`.
pub const DEFAULT_CONTENT: &[&str] = &["./src/**/*.clj", "./resources/**/*.html"];

pub fn default_content() -> Vec<String> {
    DEFAULT_CONTENT.iter().map(|s| s.to_string()).collect()
}

/// Render a starter `sift.toml`.
pub fn config_template(project_name: &str) -> String {
    format!(
        r##"# Sift configuration for {project_name}

# Files scanned for class usage (gitignore-style globs, relative to the scan root).
content = ["./src/**/*.clj", "./resources/**/*.html"]

plugins = ["daisyui"]
dark_mode = false

[theme.extend.colors]
primary = "#146a8e"

[variants.extend]

[safelist]
classes = []
patterns = []

[scan]
max_file_size = 1048576
extra_ignore = []
"##
    )
}
