//! Detector settings.

use crate::constants::{DEFAULT_INPUT_SIZE, DEFAULT_MIN_SCORE};
use crate::error::{MediaError, Result};
use std::path::PathBuf;

/// Where the model lives and how its output is filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSettings {
    /// Frozen TensorFlow graph (`.pb`)
    pub model: PathBuf,
    /// Optional text graph (`.pbtxt`) describing the model
    pub config: Option<PathBuf>,
    /// Boxes scoring below this are dropped
    pub min_score: f32,
    /// Side of the square network input
    pub input_size: i32,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            model: PathBuf::from("models/ssd_mobilenet_coco.pb"),
            config: Some(PathBuf::from("models/ssd_mobilenet_coco.pbtxt")),
            min_score: DEFAULT_MIN_SCORE,
            input_size: DEFAULT_INPUT_SIZE,
        }
    }
}

impl DetectorSettings {
    /// Checks ranges and that the model files exist.
    ///
    /// # Errors
    /// Returns `MediaError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MediaError::Config(format!(
                "detector_min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        if self.input_size <= 0 {
            return Err(MediaError::Config(format!(
                "detector_input_size must be positive, got {}",
                self.input_size
            )));
        }
        if !self.model.is_file() {
            return Err(MediaError::Config(format!(
                "Model file not found: {}",
                self.model.display()
            )));
        }
        if let Some(config) = &self.config
            && !config.is_file()
        {
            return Err(MediaError::Config(format!(
                "Model config not found: {}",
                config.display()
            )));
        }
        Ok(())
    }
}
