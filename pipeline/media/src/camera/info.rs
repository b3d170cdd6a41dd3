//! Detected camera metadata.

/// A camera found by [`super::CameraDetection`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInfo {
    pub device_id: i32,
    /// Friendly name, from v4l2 where available
    pub name: String,
    /// Resolution the device opened with
    pub max_width: u32,
    pub max_height: u32,
}

impl CameraInfo {
    pub fn new(device_id: i32, name: String, max_width: u32, max_height: u32) -> Self {
        Self {
            device_id,
            name,
            max_width,
            max_height,
        }
    }

    pub fn resolution_string(&self) -> String {
        format!("{}x{}", self.max_width, self.max_height)
    }

    /// Pixel count, used to rank devices.
    pub fn area(&self) -> u64 {
        u64::from(self.max_width) * u64::from(self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info() {
        let info = CameraInfo::new(2, "USB Camera".to_string(), 1920, 1080);
        assert_eq!(info.resolution_string(), "1920x1080");
        assert_eq!(info.area(), 2_073_600);
    }
}
