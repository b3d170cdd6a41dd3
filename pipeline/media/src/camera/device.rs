//! Camera device management.

use super::config::CameraConfig;
use super::detection::CameraDetection;
use crate::constants::CAMERA_LOG_INTERVAL;
use crate::converters::mat_to_frame;
use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{
    CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture,
};
use pipeline::{FrameSource, PipelineError};

/// Video capture device
///
/// Wraps an OpenCV `VideoCapture`. Frames come out as RGB [`VideoFrame`]s.
pub struct Camera {
    capture: VideoCapture,
    config: CameraConfig,
    logger: Logger,
    frame_count: u64,
    width: u32,
    height: u32,
    fps: f64,
}

impl Camera {
    /// Opens and configures a camera.
    ///
    /// With no `device_id` in the config, the detected camera with the
    /// largest resolution is used at that resolution.
    ///
    /// # Errors
    /// Returns `MediaError::Camera` if no device is found or it cannot be opened.
    pub fn open(config: CameraConfig, logger: Logger) -> Result<Self> {
        let config = match config.device_id {
            Some(_) => config,
            None => {
                let device = CameraDetection::best_device(&logger).ok_or_else(|| {
                    MediaError::Camera(
                        "No camera devices found. Please connect a camera and try again."
                            .to_string(),
                    )
                })?;
                logger.info(&format!(
                    "Auto-selected: {} (ID: {}, {})",
                    device.name,
                    device.device_id,
                    device.resolution_string()
                ));
                CameraConfig {
                    device_id: Some(device.device_id),
                    width: config.width.or(Some(device.max_width)),
                    height: config.height.or(Some(device.max_height)),
                    fps: config.fps,
                }
            }
        };
        let device_id = config.device_id.unwrap_or(0);

        logger.info(&format!(
            "Opening camera {} @ {} fps",
            device_id, config.fps
        ));

        let mut capture = VideoCapture::new(device_id, CAP_ANY)
            .map_err(|e| MediaError::Camera(format!("Failed to open camera: {}", e)))?;

        if !capture.is_opened().unwrap_or(false) {
            return Err(MediaError::Camera(format!(
                "Camera {} is not available",
                device_id
            )));
        }

        if let Some((width, height)) = config.resolution() {
            let _ = capture.set(CAP_PROP_FRAME_WIDTH, f64::from(width));
            let _ = capture.set(CAP_PROP_FRAME_HEIGHT, f64::from(height));
        }
        let _ = capture.set(CAP_PROP_FPS, config.fps);

        let width = capture.get(CAP_PROP_FRAME_WIDTH)? as u32;
        let height = capture.get(CAP_PROP_FRAME_HEIGHT)? as u32;
        let fps = capture.get(CAP_PROP_FPS)?;

        logger.info(&format!(
            "Camera configured: {}x{} @ {:.1} FPS",
            width, height, fps
        ));
        if let Some((req_w, req_h)) = config.resolution()
            && (width != req_w || height != req_h)
        {
            logger.warn(&format!(
                "Resolution mismatch (got: {}x{}, requested: {}x{})",
                width, height, req_w, req_h
            ));
        }

        Ok(Camera {
            capture,
            config,
            logger,
            frame_count: 0,
            width,
            height,
            fps,
        })
    }

    /// Reads one frame.
    ///
    /// # Errors
    /// Returns `MediaError::Camera` on a failed or empty read.
    pub fn read_frame(&mut self) -> Result<VideoFrame> {
        let mut mat = Mat::default();

        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| MediaError::Camera(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() || mat.cols() == 0 || mat.rows() == 0 {
            return Err(MediaError::Camera("Empty or invalid frame".to_string()));
        }

        let frame = mat_to_frame(&mat)?;
        self.width = frame.width();
        self.height = frame.height();
        self.frame_count += 1;

        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            self.logger
                .debug(&format!("Frames captured: {}", self.frame_count));
        }

        Ok(frame)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Frame rate the device reported after configuration.
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

impl FrameSource for Camera {
    type Image = VideoFrame;

    fn is_ready(&self) -> bool {
        self.capture.is_opened().unwrap_or(false)
    }

    fn capture_frame(&mut self) -> std::result::Result<VideoFrame, PipelineError> {
        Ok(self.read_frame()?)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        self.logger.info(&format!(
            "Closing camera. Total frames captured: {}",
            self.frame_count
        ));

        if let Err(e) = self.capture.release() {
            self.logger.error(&format!("Error releasing camera: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_invalid_id() {
        let config = CameraConfig::new(999, 30.0).unwrap();
        assert!(Camera::open(config, Logger::disabled()).is_err());
    }
}
