//! The [`Logger`] handle.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::spawn_writer_thread;
use crate::settings::LogSettings;
use std::path::PathBuf;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// Clones and component loggers share one channel to one writer thread, so
/// records from the capture, detection and UI threads land in a single file in
/// the order they were sent.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::new("snapsort.log".into(), LogLevel::Info).unwrap();
/// let capture = logger.for_component("Capture");
/// capture.info("Capture session started");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Option<Sender<LogMessage>>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a file logger with its own writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Self::from_settings(&LogSettings {
            path: log_path,
            level,
            console: false,
            file: true,
        })
    }

    /// Creates a logger from [`LogSettings`].
    ///
    /// With `file` disabled no writer thread is started and records only go to
    /// stdout (when `console` is set).
    ///
    /// # Errors
    ///
    /// Returns error if file output is enabled and the file cannot be opened.
    pub fn from_settings(settings: &LogSettings) -> Result<Self> {
        let sender = if settings.file {
            let (sender, receiver) = channel();
            spawn_writer_thread(&settings.path, receiver)?;
            Some(sender)
        } else {
            None
        };

        Ok(Logger {
            sender,
            level: settings.level,
            component: None,
            console_output: settings.console,
        })
    }

    /// A logger that drops everything. Used where logging is optional.
    pub fn disabled() -> Self {
        Logger {
            sender: None,
            level: LogLevel::Error,
            component: None,
            console_output: false,
        }
    }

    /// Returns a logger tagged with `component` that shares this logger's
    /// writer thread and level.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            sender: self.sender.clone(),
            level: self.level,
            component: Some(component.to_string()),
            console_output: self.console_output,
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

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        if self.sender.is_none() && !self.console_output {
            return;
        }

        let msg = LogMessage::new(level, self.component.clone(), message.to_string());

        if self.console_output {
            print!("{}", msg.format());
        }

        if let Some(sender) = &self.sender {
            // The writer only goes away at process exit.
            let _ = sender.send(msg);
        }
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
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Debug).unwrap();
        logger.info("Test message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Warn).unwrap();
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(!content.contains("Debug message"));
        assert!(!content.contains("Info message"));
        assert!(content.contains("Warn message"));
    }

    #[test]
    fn test_component_loggers_share_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Info).unwrap();
        let capture = logger.for_component("Capture");
        let detection = logger.for_component("Detection");

        let handle = thread::spawn(move || detection.info("Detector loaded"));
        capture.info("Session started");
        handle.join().unwrap();
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("[Capture]"));
        assert!(content.contains("Session started"));
        assert!(content.contains("[Detection]"));
        assert!(content.contains("Detector loaded"));
    }

    #[test]
    fn test_for_component_keeps_level() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(dir.path().join("test.log"), LogLevel::Warn).unwrap();
        let child = logger.for_component("Media");

        assert_eq!(child.level(), LogLevel::Warn);
        assert_eq!(child.component(), Some("Media"));
    }

    #[test]
    fn test_file_disabled_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("never.log");

        let logger = Logger::from_settings(&LogSettings {
            path: log_path.clone(),
            level: LogLevel::Debug,
            console: false,
            file: false,
        })
        .unwrap();
        logger.error("dropped");
        wait_for_write();

        assert!(!log_path.exists());
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = Logger::disabled();
        logger.error("nothing happens");
        assert_eq!(logger.component(), None);
    }
}
