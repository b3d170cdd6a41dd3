//! Timed multi-frame capture.

pub mod buffer;
pub mod frame;
pub mod session;

pub use buffer::{CaptureBuffer, MAX_CAPTURE_FRAMES};
pub use frame::CapturedFrame;
pub use session::{CaptureLimits, CaptureSession};
