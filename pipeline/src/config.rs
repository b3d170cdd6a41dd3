//! Pipeline settings.

use crate::capture::{CaptureLimits, MAX_CAPTURE_FRAMES};
use crate::detection::DEFAULT_DETECTION_INTERVAL;
use crate::error::{PipelineError, Result};
use std::time::Duration;

/// Default number of history records kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Settings for the capture and detection halves of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub capture: CaptureLimits,
    pub detection_interval: Duration,
    /// Fixed seed for the partitioner; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Maximum capture history records; the oldest are dropped first.
    pub history_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            capture: CaptureLimits::default(),
            detection_interval: DEFAULT_DETECTION_INTERVAL,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Rejects settings that would stall or disable the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.capture.max_frames == 0 {
            return Err(PipelineError::Config(
                "capture_max_frames must be at least 1".to_string(),
            ));
        }
        if self.capture.max_frames > MAX_CAPTURE_FRAMES {
            return Err(PipelineError::Config(format!(
                "capture_max_frames must be at most {}",
                MAX_CAPTURE_FRAMES
            )));
        }
        if self.capture.time_limit.is_zero() {
            return Err(PipelineError::Config(
                "capture_time_limit_ms must be greater than 0".to_string(),
            ));
        }
        if self.detection_interval.is_zero() {
            return Err(PipelineError::Config(
                "detection_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
