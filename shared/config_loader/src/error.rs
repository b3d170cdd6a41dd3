use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or interpreting a config file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No file at the given path, or none in any searched location
    FileNotFound(String),
    /// The file exists but could not be read
    ReadError(String),
    /// A non-comment line without `=`
    MalformedLine { line: usize, content: String },
    /// A key whose value cannot be interpreted
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Builds an [`ConfigError::InvalidValue`] for `key = value`.
    pub fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::MalformedLine { line, content } => {
                write!(f, "Malformed config line {}: '{}'", line, content)
            }
            ConfigError::InvalidValue { key, value, reason } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
