//! Background file writer.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::thread;

/// Appends records to a log file from a dedicated thread.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens (or creates) the file in append mode.
    pub fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_record(&mut self, record: &LogMessage) {
        let mut line = record.line();
        line.push('\n');
        if let Err(e) = self
            .file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
        {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Drains the channel until every sender has been dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for record in receiver {
            self.write_record(&record);
        }
    }
}

/// Opens the file up front so errors reach the caller, then spawns the writer.
pub(crate) fn spawn_writer_thread(log_path: &Path, receiver: Receiver<LogMessage>) -> Result<()> {
    let writer = LogWriter::open(log_path)?;
    thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))?;
    Ok(())
}
