//! Log destinations.

use crate::log_message::LogMessage;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

/// Where a [`crate::Logger`] delivers its records.
///
/// Clones share the destination: a cloned file sink feeds the same writer
/// thread, a cloned memory sink appends to the same buffer.
#[derive(Debug, Clone)]
pub(crate) enum LogSink {
    File(Sender<LogMessage>),
    Console,
    Memory(Arc<Mutex<Vec<String>>>),
}

impl LogSink {
    pub fn memory() -> Self {
        LogSink::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn write(&self, record: LogMessage) {
        match self {
            // The writer thread only goes away with the process.
            LogSink::File(sender) => {
                let _ = sender.send(record);
            }
            LogSink::Console => println!("{}", record.line()),
            LogSink::Memory(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(record.line()),
        }
    }

    pub fn captured(&self) -> Vec<String> {
        match self {
            LogSink::Memory(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            _ => Vec::new(),
        }
    }
}
