//! Continuous object detection over the live feed.

pub mod bounding_box;
pub mod detection_loop;
pub mod detector;

pub use bounding_box::{BoundingBox, DetectionResult};
pub use detection_loop::{DEFAULT_DETECTION_INTERVAL, DetectionLoop, LoopState};
pub use detector::{Detector, DetectorLoader};
