//! Logging configuration
//!
//! Read from a properties file:
//!
//! ```text
//! logging.file      = data-consumer.log
//! logging.level     = debug
//! logging.console   = true
//! logging.component = Receiver
//! ```

use crate::error::Result;
use config_loader::Properties;
use logging::{LogLevel, Logger};
use std::path::{Path, PathBuf};

/// Default file name looked up by [`LoggingConfig::discover`]
pub const DEFAULT_CONFIG_FILE: &str = "data-consumer.conf";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log file; `None` logs to the console only
    pub log_file_path: Option<PathBuf>,
    pub log_level: LogLevel,
    pub enable_console: bool,
    /// Component tag for top-level records
    pub component: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_file_path: Some(PathBuf::from("data-consumer.log")),
            log_level: LogLevel::Info,
            enable_console: false,
            component: "DataConsumer".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Applies the `logging.*` keys on top of the defaults
    ///
    /// An empty `logging.file` disables file output.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = props.get("logging.file") {
            config.log_file_path = (!file.is_empty()).then(|| PathBuf::from(file));
        }
        if let Some(level) = props.parse_value::<LogLevel>("logging.level")? {
            config.log_level = level;
        }
        if let Some(console) = props.parse_value::<bool>("logging.console")? {
            config.enable_console = console;
        }
        if let Some(component) = props.get("logging.component") {
            config.component = component.to_string();
        }

        Ok(config)
    }

    /// Loads the configuration from a properties file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let props = config_loader::load_properties(path)?;
        Self::from_properties(&props)
    }

    /// Loads [`DEFAULT_CONFIG_FILE`] from the usual locations, or the defaults
    /// when none exists
    pub fn discover() -> Result<Self> {
        match config_loader::find_config_file(DEFAULT_CONFIG_FILE) {
            Ok(path) => Self::load_from_file(path),
            Err(config_loader::ConfigError::FileNotFound(_)) => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Builds the logger described by this configuration
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be opened.
    pub fn build_logger(&self) -> Result<Logger> {
        let logger = match self.log_file_path {
            Some(ref path) => {
                Logger::new(path, self.log_level)?.with_console_output(self.enable_console)
            }
            None => Logger::console(self.log_level),
        };
        Ok(logger.for_component(&self.component))
    }
}
