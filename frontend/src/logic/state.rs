//! Logic Thread State
//!
//! Owns the camera and the pipeline pieces built on it, independent of egui.

use logging::Logger;
use media::Camera;
use pipeline::{CaptureController, DetectionLoop, StdRandomSizer, TaskHandle};
use std::sync::Arc;

pub type Controller = CaptureController<Camera, StdRandomSizer>;

/// State maintained by the logic thread.
pub struct LogicState {
    pub controller: Option<Arc<Controller>>,
    pub detection: Option<DetectionLoop<Camera>>,
    pub preview: Option<TaskHandle>,
    /// Set once the UI was told the detector failed to load
    pub detector_failure_reported: bool,
    pub logger: Logger,
}

impl LogicState {
    pub fn new(logger: Logger) -> Self {
        Self {
            controller: None,
            detection: None,
            preview: None,
            detector_failure_reported: false,
            logger,
        }
    }

    /// Stops background tasks. The camera is released with the last
    /// reference to it.
    pub fn cleanup(&mut self) {
        self.logger.info("Shutting down pipeline...");

        if let Some(mut detection) = self.detection.take() {
            detection.stop();
        }
        if let Some(mut preview) = self.preview.take() {
            preview.stop();
        }
        self.controller = None;

        self.logger.info("Cleanup complete");
    }
}
