//! Error types for camera and detector operations.

use pipeline::PipelineError;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, MediaError>;

/// Error type for media operations
#[derive(Debug)]
pub enum MediaError {
    /// Configuration error
    Config(String),
    /// I/O error
    Io(io::Error),
    /// Camera error
    Camera(String),
    /// Detector error
    Detector(String),
    /// OpenCV error
    OpenCv(opencv::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Config(msg) => write!(f, "Config error: {}", msg),
            MediaError::Io(err) => write!(f, "I/O error: {}", err),
            MediaError::Camera(msg) => write!(f, "Camera error: {}", msg),
            MediaError::Detector(msg) => write!(f, "Detector error: {}", msg),
            MediaError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<io::Error> for MediaError {
    fn from(err: io::Error) -> Self {
        MediaError::Io(err)
    }
}

impl From<opencv::Error> for MediaError {
    fn from(err: opencv::Error) -> Self {
        MediaError::OpenCv(err)
    }
}

/// Camera failures cost one capture attempt, detector failures one tick.
impl From<MediaError> for PipelineError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Camera(msg) => PipelineError::Capture(msg),
            MediaError::Config(msg) => PipelineError::Config(msg),
            other => PipelineError::Detector(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MediaError::Camera("Device not found".to_string());
        assert_eq!(err.to_string(), "Camera error: Device not found");

        let err = MediaError::Detector("bad output shape".to_string());
        assert_eq!(err.to_string(), "Detector error: bad output shape");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "model.pb");
        let media_err: MediaError = io_err.into();
        assert!(matches!(media_err, MediaError::Io(_)));
    }

    #[test]
    fn test_into_pipeline_error() {
        let err: PipelineError = MediaError::Camera("Empty or invalid frame".to_string()).into();
        assert_eq!(err, PipelineError::Capture("Empty or invalid frame".to_string()));

        let err: PipelineError = MediaError::Detector("no output".to_string()).into();
        assert!(matches!(err, PipelineError::Detector(_)));
    }
}
