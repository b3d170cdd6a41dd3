pub mod capture;

pub use capture::{CapturePage, CaptureView};
