//! Stable error codes surfaced to callers (CLI output, build-tool integrations).

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_SERIALIZE: &str = "CONFIG_SERIALIZE";
pub const INVALID_GLOB: &str = "INVALID_GLOB";
pub const INVALID_SAFELIST_PATTERN: &str = "INVALID_SAFELIST_PATTERN";
pub const EMPTY_CONTENT: &str = "EMPTY_CONTENT";
pub const SCAN_ROOT_NOT_FOUND: &str = "SCAN_ROOT_NOT_FOUND";
pub const SCAN_INVALID_PATTERN: &str = "SCAN_INVALID_PATTERN";
pub const SCAN_WALK_ERROR: &str = "SCAN_WALK_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait SiftErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, as printed by the CLI.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
