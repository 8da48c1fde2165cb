pub mod error_code;

mod config_error;
mod scan_error;

pub use config_error::ConfigError;
pub use scan_error::ScanError;
