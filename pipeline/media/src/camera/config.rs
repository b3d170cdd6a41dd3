//! Camera configuration types.

use crate::constants::{MAX_HEIGHT, MAX_WIDTH};
use crate::error::{MediaError, Result};

/// Camera capture configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Device index; `None` picks the largest detected camera
    pub device_id: Option<i32>,
    /// Requested frame width (None = device default)
    pub width: Option<u32>,
    /// Requested frame height (None = device default)
    pub height: Option<u32>,
    /// Target frames per second
    pub fps: f64,
}

impl CameraConfig {
    const MIN_FPS: f64 = 1.0;
    const MAX_FPS: f64 = 240.0;

    /// Creates a configuration for a specific device.
    ///
    /// # Arguments
    /// * `device_id` - Camera device identifier
    /// * `fps` - Target frames per second (clamped to 1.0-240.0)
    ///
    /// # Errors
    /// Returns `MediaError::Config` if `fps` is NaN or infinite.
    pub fn new(device_id: i32, fps: f64) -> Result<Self> {
        Ok(Self {
            device_id: Some(device_id),
            fps: Self::checked_fps(fps)?,
            ..Self::default()
        })
    }

    /// Creates a configuration that auto-selects the device.
    pub fn auto(fps: f64) -> Result<Self> {
        Ok(Self {
            device_id: None,
            fps: Self::checked_fps(fps)?,
            ..Self::default()
        })
    }

    /// Sets a specific resolution.
    ///
    /// # Errors
    /// Returns `MediaError::Config` if either side is 0 or above 8K.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Result<Self> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(MediaError::Config(format!(
                "Width must be between 1 and {}, got {}",
                MAX_WIDTH, width
            )));
        }
        if !(1..=MAX_HEIGHT).contains(&height) {
            return Err(MediaError::Config(format!(
                "Height must be between 1 and {}, got {}",
                MAX_HEIGHT, height
            )));
        }

        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Returns the resolution if both sides are configured.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    fn checked_fps(fps: f64) -> Result<f64> {
        if !fps.is_finite() {
            return Err(MediaError::Config(
                "FPS must be a finite number (not NaN or infinite)".to_string(),
            ));
        }
        Ok(fps.clamp(Self::MIN_FPS, Self::MAX_FPS))
    }
}

/// Device 0 at 30 FPS, device resolution.
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: Some(0),
            width: None,
            height: None,
            fps: 30.0,
        }
    }
}
