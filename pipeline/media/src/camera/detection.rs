//! Camera enumeration.

use super::info::CameraInfo;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH};
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture};

/// Finds usable camera devices.
pub struct CameraDetection;

impl CameraDetection {
    /// Opens every candidate device briefly and returns the ones that work.
    pub fn list_devices(logger: &Logger) -> Vec<CameraInfo> {
        let candidates = Self::candidate_ids();
        logger.info(&format!(
            "Probing {} potential camera device(s)",
            candidates.len()
        ));

        let cameras: Vec<CameraInfo> = candidates
            .into_iter()
            .filter_map(|id| {
                let info = Self::probe(id, logger);
                if info.is_none() {
                    logger.debug(&format!("Device {} is not usable", id));
                }
                info
            })
            .collect();

        if cameras.is_empty() {
            logger.warn("No cameras detected");
        }
        cameras
    }

    /// Picks the detected camera with the largest resolution.
    pub fn best_device(logger: &Logger) -> Option<CameraInfo> {
        Self::list_devices(logger)
            .into_iter()
            .max_by_key(CameraInfo::area)
    }

    fn probe(device_id: i32, logger: &Logger) -> Option<CameraInfo> {
        if !Self::device_node_exists(device_id) {
            return None;
        }

        let mut capture = VideoCapture::new(device_id, CAP_ANY).ok()?;
        if !capture.is_opened().unwrap_or(false) {
            let _ = capture.release();
            return None;
        }

        let width = capture.get(CAP_PROP_FRAME_WIDTH).unwrap_or(0.0) as u32;
        let height = capture.get(CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0) as u32;
        let _ = capture.release();

        let (width, height) = sanitize_resolution(width, height);
        let info = CameraInfo::new(device_id, Self::device_name(device_id), width, height);
        logger.info(&format!(
            "Device {}: {} - {}",
            device_id,
            info.name,
            info.resolution_string()
        ));
        Some(info)
    }

    /// Even `/dev/video*` nodes on Linux (odd ones are usually metadata),
    /// the first four indices elsewhere.
    #[cfg(target_os = "linux")]
    fn candidate_ids() -> Vec<i32> {
        let mut ids: Vec<i32> = std::fs::read_dir("/dev")
            .map(|entries| {
                entries
                    .flatten()
                    .filter_map(|entry| {
                        entry
                            .file_name()
                            .to_str()
                            .and_then(|name| name.strip_prefix("video"))
                            .and_then(|id| id.parse::<i32>().ok())
                    })
                    .filter(|id| id % 2 == 0 && *id < 20)
                    .collect()
            })
            .unwrap_or_default();

        ids.sort_unstable();
        if ids.is_empty() {
            ids.push(0);
        }
        ids
    }

    #[cfg(not(target_os = "linux"))]
    fn candidate_ids() -> Vec<i32> {
        vec![0, 1, 2, 3]
    }

    #[cfg(target_os = "linux")]
    fn device_node_exists(device_id: i32) -> bool {
        std::path::Path::new(&format!("/dev/video{}", device_id)).exists()
    }

    #[cfg(not(target_os = "linux"))]
    fn device_node_exists(_device_id: i32) -> bool {
        true
    }

    #[cfg(target_os = "linux")]
    fn device_name(device_id: i32) -> String {
        let path = format!("/sys/class/video4linux/video{}/name", device_id);
        std::fs::read_to_string(path)
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|_| format!("Camera {}", device_id))
    }

    #[cfg(not(target_os = "linux"))]
    fn device_name(device_id: i32) -> String {
        format!("Camera {}", device_id)
    }
}

/// Replaces zero or absurd reported sizes with 640x480.
fn sanitize_resolution(width: u32, height: u32) -> (u32, u32) {
    if width > 0 && height > 0 && width <= MAX_WIDTH && height <= MAX_HEIGHT {
        (width, height)
    } else {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
