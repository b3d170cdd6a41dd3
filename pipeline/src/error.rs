//! Error types for the pipeline.
//!
//! None of these are fatal to the process: each one degrades a single
//! feature (a skipped frame, an inert overlay, a rejected capture request).

use std::fmt;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Error type for pipeline operations
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The frame source is not initialized yet
    SourceNotReady,
    /// A frame could not be read from the source
    Capture(String),
    /// The detector failed on a single frame
    Detector(String),
    /// The detector could not be loaded
    DetectorLoad(String),
    /// A capture was requested while another one is running
    CaptureInProgress,
    /// A background task could not be spawned
    Scheduler(String),
    /// Invalid pipeline configuration
    Config(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::SourceNotReady => write!(f, "Frame source is not ready"),
            PipelineError::Capture(msg) => write!(f, "Capture error: {}", msg),
            PipelineError::Detector(msg) => write!(f, "Detector error: {}", msg),
            PipelineError::DetectorLoad(msg) => write!(f, "Detector failed to load: {}", msg),
            PipelineError::CaptureInProgress => write!(f, "A capture is already in progress"),
            PipelineError::Scheduler(msg) => write!(f, "Scheduler error: {}", msg),
            PipelineError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PipelineError::Capture("device unplugged".to_string()).to_string(),
            "Capture error: device unplugged"
        );
        assert_eq!(
            PipelineError::DetectorLoad("missing model".to_string()).to_string(),
            "Detector failed to load: missing model"
        );
        assert_eq!(
            PipelineError::CaptureInProgress.to_string(),
            "A capture is already in progress"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err = PipelineError::SourceNotReady;
        let _: &dyn std::error::Error = &err;
    }
}
