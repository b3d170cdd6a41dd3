//! Scripted sources and detectors shared by the unit tests.

use crate::detection::{BoundingBox, Detector};
use crate::error::{PipelineError, Result};
use crate::source::FrameSource;
use std::thread;
use std::time::Duration;

/// Source producing sequential `u32` frames.
pub(crate) struct CountingSource {
    next: u32,
    ready: bool,
    delay: Duration,
    fail_on: Vec<u32>,
    attempts: u32,
}

impl CountingSource {
    pub(crate) fn new() -> Self {
        Self {
            next: 1,
            ready: true,
            delay: Duration::ZERO,
            fail_on: Vec::new(),
            attempts: 0,
        }
    }

    pub(crate) fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fails the given read attempts (1-based).
    pub(crate) fn failing_on(mut self, attempts: &[u32]) -> Self {
        self.fail_on = attempts.to_vec();
        self
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl FrameSource for CountingSource {
    type Image = u32;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn capture_frame(&mut self) -> Result<u32> {
        self.attempts += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if self.fail_on.contains(&self.attempts) {
            return Err(PipelineError::Capture("scripted failure".to_string()));
        }
        let frame = self.next;
        self.next += 1;
        Ok(frame)
    }

    fn width(&self) -> u32 {
        640
    }

    fn height(&self) -> u32 {
        480
    }
}

/// Detector returning one box labelled with the frame id.
pub(crate) struct EchoDetector;

impl Detector<u32> for EchoDetector {
    fn detect(&mut self, frame: &u32) -> Result<Vec<BoundingBox>> {
        Ok(vec![BoundingBox::new(
            10.0,
            20.0,
            30.0,
            40.0,
            format!("frame-{}", frame),
            0.9,
        )])
    }

    fn name(&self) -> &str {
        "echo"
    }
}
