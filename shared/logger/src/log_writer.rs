//! Background writer that appends records to the log file.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens (or creates) the log file in append mode, creating parent
    /// directories when they are missing.
    pub fn new(log_path: &Path) -> Result<Self> {
        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_message(&mut self, message: &LogMessage) {
        if let Err(e) = self
            .file
            .write_all(message.format().as_bytes())
            .and_then(|_| self.file.flush())
        {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Drains the channel until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for message in receiver {
            self.write_message(&message);
        }
    }
}

/// Opens the file on the caller's thread so open errors surface immediately,
/// then moves the writer onto its own thread.
pub(crate) fn spawn_writer_thread(log_path: &Path, receiver: Receiver<LogMessage>) -> Result<()> {
    let writer = LogWriter::new(log_path)?;
    std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))?;
    Ok(())
}
