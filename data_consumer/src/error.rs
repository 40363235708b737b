//! Data consumer error types
//!
//! Every fallible operation in this crate returns [`DataConsumerError`].

use config_loader::ConfigError;
use logging::LoggingError;
use std::fmt;

pub type Result<T> = std::result::Result<T, DataConsumerError>;

/// Data consumer errors
#[derive(Debug)]
pub enum DataConsumerError {
    /// A consumer with this id is already registered in the session
    DuplicateId(String),
    /// The session was torn down and accepts no more consumers
    SessionClosed,
    Config(ConfigError),
    Logging(LoggingError),
}

impl fmt::Display for DataConsumerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataConsumerError::DuplicateId(id) => write!(f, "Duplicate data consumer id: {}", id),
            DataConsumerError::SessionClosed => write!(f, "Session closed"),
            DataConsumerError::Config(err) => write!(f, "Config error: {}", err),
            DataConsumerError::Logging(err) => write!(f, "Logging error: {}", err),
        }
    }
}

impl std::error::Error for DataConsumerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataConsumerError::Config(err) => Some(err),
            DataConsumerError::Logging(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for DataConsumerError {
    fn from(err: ConfigError) -> Self {
        DataConsumerError::Config(err)
    }
}

impl From<LoggingError> for DataConsumerError {
    fn from(err: LoggingError) -> Self {
        DataConsumerError::Logging(err)
    }
}
