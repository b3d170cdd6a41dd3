//! Camera capture using OpenCV.

pub mod config;
pub mod detection;
pub mod device;
pub mod info;

pub use config::CameraConfig;
pub use detection::CameraDetection;
pub use device::Camera;
pub use info::CameraInfo;
