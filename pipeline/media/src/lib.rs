//! OpenCV-backed collaborators for the pipeline.
//!
//! [`Camera`] implements [`pipeline::FrameSource`] over a V4L/AVFoundation
//! device and [`SsdDetector`] implements [`pipeline::Detector`] with an SSD
//! network loaded through OpenCV's DNN module.

pub mod camera;
pub mod constants;
pub mod converters;
pub mod detector;
pub mod error;
pub mod frame;

pub use camera::{Camera, CameraConfig, CameraDetection, CameraInfo};
pub use detector::{DetectorSettings, SsdDetector, coco_label};
pub use error::{MediaError, Result};
pub use frame::VideoFrame;
