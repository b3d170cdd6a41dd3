//! Object detection with an SSD network through OpenCV DNN.

pub mod labels;
pub mod settings;
pub mod ssd;

pub use labels::coco_label;
pub use settings::DetectorSettings;
pub use ssd::SsdDetector;
