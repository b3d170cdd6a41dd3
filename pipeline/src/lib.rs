//! Capture-partition-sort pipeline
//!
//! Pulls a bounded burst of frames from a [`FrameSource`], carves them into
//! randomly sized categories and orders those for display, while a
//! [`DetectionLoop`] keeps publishing bounding boxes for the same feed.
//!
//! # Flow
//!
//! ```text
//! FrameSource --> CaptureSession --> Partitioner --> DisplayOrderer --> StateCell --> Renderer
//!      \                                                                   ^
//!       `--> DetectionLoop (+ Detector) --> StateCell ---------------------'
//! ```
//!
//! The capture half runs once per user action through [`CaptureController`];
//! the detection half runs on its own scheduled task until torn down.

pub mod capture;
pub mod config;
pub mod controller;
pub mod detection;
pub mod error;
pub mod ordering;
pub mod partition;
pub mod renderer;
pub mod scheduler;
pub mod source;
pub mod state_cell;

#[cfg(test)]
pub(crate) mod test_support;

pub use capture::{
    CaptureBuffer, CaptureLimits, CaptureSession, CapturedFrame, MAX_CAPTURE_FRAMES,
};
pub use config::PipelineConfig;
pub use controller::{CaptureController, CaptureRecord, CaptureSummary};
pub use detection::{
    BoundingBox, DetectionLoop, DetectionResult, Detector, DetectorLoader, LoopState,
};
pub use error::{PipelineError, Result};
pub use ordering::DisplayOrderer;
pub use partition::{
    Category, CategorySet, Partitioner, RandomSizer, ScriptedSizer, SliceSizer, StdRandomSizer,
};
pub use renderer::{CategoryRow, DisplayFeed, Renderer};
pub use scheduler::{Scheduler, TaskHandle, TickControl};
pub use source::{FrameSource, SharedSource};
pub use state_cell::{Stamped, StateCell};
