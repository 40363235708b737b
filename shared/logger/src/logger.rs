//! Thread-safe logger.
//!
//! This module provides the main [`Logger`] interface. Records are filtered by
//! level, tagged with an optional component name and handed to a sink.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::spawn_writer_thread;
use crate::sink::LogSink;
use std::path::Path;
use std::sync::mpsc::channel;

/// Thread-safe, non-blocking logger.
///
/// Cloneable instances share the same sink.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::in_memory(LogLevel::Debug).for_component("Session");
/// logger.info("session started");
/// assert!(logger.captured()[0].ends_with("INFO [Session]: session started"));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    sink: LogSink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger that appends to a file through a dedicated writer thread.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created if it doesn't exist)
    /// * `level` - Minimum log level to record
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: impl AsRef<Path>, level: LogLevel) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(log_path.as_ref(), receiver)?;
        Ok(Self::with_sink(LogSink::File(sender), level))
    }

    /// Creates a logger that prints every record to stdout.
    pub fn console(level: LogLevel) -> Self {
        Self::with_sink(LogSink::Console, level)
    }

    /// Creates a logger that keeps records in memory, see [`Logger::captured`].
    pub fn in_memory(level: LogLevel) -> Self {
        Self::with_sink(LogSink::memory(), level)
    }

    fn with_sink(sink: LogSink, level: LogLevel) -> Self {
        Self {
            sink,
            level,
            component: None,
            console_output: false,
        }
    }

    /// Also echo records to stdout. Has no effect on a console logger.
    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled && !matches!(self.sink, LogSink::Console);
        self
    }

    /// Returns a logger for another component that shares this sink and level.
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let main_logger = Logger::in_memory(LogLevel::Info);
    /// let channel_logger = main_logger.for_component("DataChannel");
    /// channel_logger.info("open");
    /// assert_eq!(main_logger.captured().len(), 1);
    /// ```
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Component tag, if any.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Lines recorded so far by an in-memory logger; empty for other sinks.
    pub fn captured(&self) -> Vec<String> {
        self.sink.captured()
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let record = LogMessage::new(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", record.line());
        }
        self.sink.write(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_file_logger_writes_records() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Debug).unwrap();
        logger.info("Test message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO: Test message"));
    }

    #[test]
    fn test_file_logger_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nope").join("test.log");

        assert!(Logger::new(log_path, LogLevel::Info).is_err());
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = Logger::in_memory(LogLevel::Warn);
        logger.trace("Trace message");
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let lines = logger.captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WARN: Warn message"));
        assert!(lines[1].ends_with("ERROR: Error message"));
    }

    #[test]
    fn test_for_component_shares_sink() {
        let logger = Logger::in_memory(LogLevel::Trace);
        let component = logger.for_component("DataConsumer");

        logger.info("root");
        component.trace("scoped");

        assert_eq!(component.component(), Some("DataConsumer"));
        assert_eq!(component.level(), LogLevel::Trace);
        let lines = logger.captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("TRACE [DataConsumer]: scoped"));
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let logger = Logger::in_memory(LogLevel::Info);
        let logger_clone = logger.clone();

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();
        logger.info("Message from main");

        let lines = logger.captured();
        assert!(lines[0].contains("Message from thread"));
        assert!(lines[1].contains("Message from main"));
    }

    #[test]
    fn test_console_logger_captures_nothing() {
        let logger = Logger::console(LogLevel::Info).with_console_output(true);
        logger.info("printed once");
        assert!(logger.captured().is_empty());
    }
}
