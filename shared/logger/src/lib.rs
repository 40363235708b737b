//! Thread-safe logging library with pluggable sinks.
//!
//! A [`Logger`] writes either to a file (through a dedicated writer thread),
//! to the console, or to an in-memory buffer that tests can inspect.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;
mod sink;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
