//! A single formatted log record.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub thread: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Stamps a message with the current local time and the calling thread's name.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            thread: std::thread::current().name().map(str::to_string),
            message,
        }
    }

    /// Formats the record as one line:
    /// `[timestamp] LEVEL [component] (thread): message\n`.
    /// Component and thread are omitted when unknown.
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {}", self.timestamp, self.level.as_str());
        if let Some(component) = &self.component {
            line.push_str(&format!(" [{}]", component));
        }
        if let Some(thread) = &self.thread {
            line.push_str(&format!(" ({})", thread));
        }
        line.push_str(": ");
        line.push_str(&self.message);
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_component() {
        let msg = LogMessage::new(
            LogLevel::Warn,
            Some("Capture".to_string()),
            "Partial capture".to_string(),
        );
        let formatted = msg.format();

        assert!(formatted.contains("WARN [Capture]"));
        assert!(formatted.ends_with(": Partial capture\n"));
    }

    #[test]
    fn test_format_without_component() {
        let mut msg = LogMessage::new(LogLevel::Info, None, "Started".to_string());
        msg.thread = None;

        let formatted = msg.format();
        assert!(formatted.contains("] INFO: Started"));
    }

    #[test]
    fn test_thread_name_recorded() {
        let handle = std::thread::Builder::new()
            .name("detection-loop".to_string())
            .spawn(|| LogMessage::new(LogLevel::Debug, None, "tick".to_string()))
            .unwrap();
        let msg = handle.join().unwrap();

        assert_eq!(msg.thread.as_deref(), Some("detection-loop"));
        assert!(msg.format().contains("(detection-loop)"));
    }

    #[test]
    fn test_timestamp_format() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test".to_string());
        let ts = &msg.timestamp;

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[19..20], ".");
    }
}
