use std::fmt;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating, reading or parsing configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file was not found
    FileNotFound(String),

    /// The file exists but could not be read
    ReadError(String),

    /// A line of a properties file is malformed
    Parse { line: usize, message: String },

    /// A value is present but has the wrong shape
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for '{}': {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
