use crate::log_level::LogLevel;
use std::path::PathBuf;

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    /// Log file path, created on first use
    pub path: PathBuf,
    /// Minimum level recorded
    pub level: LogLevel,
    /// Echo every record to stdout
    pub console: bool,
    /// Append records to `path`
    pub file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("snapsort.log"),
            level: LogLevel::Info,
            console: false,
            file: true,
        }
    }
}
