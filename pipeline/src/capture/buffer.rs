//! Ordered, capacity-bounded buffer filled by a capture session.

use super::frame::CapturedFrame;
use std::time::Duration;

/// Hard ceiling on frames per capture session.
pub const MAX_CAPTURE_FRAMES: usize = 25;

/// Frames from one capture session in capture order.
///
/// Never holds more than `capacity` frames, and `capacity` never exceeds
/// [`MAX_CAPTURE_FRAMES`]. Also records how the session
/// ended so callers can tell a full burst from a partial one.
#[derive(Debug)]
pub struct CaptureBuffer<I> {
    frames: Vec<CapturedFrame<I>>,
    capacity: usize,
    timed_out: bool,
    elapsed: Duration,
}

impl<I> CaptureBuffer<I> {
    /// Capacities above [`MAX_CAPTURE_FRAMES`] are clamped to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CAPTURE_FRAMES);
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
            timed_out: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Builds a buffer from already captured frames, keeping at most
    /// `capacity` of them.
    pub fn from_frames(capacity: usize, frames: impl IntoIterator<Item = CapturedFrame<I>>) -> Self {
        let mut buffer = Self::with_capacity(capacity);
        for frame in frames.into_iter().take(buffer.capacity) {
            buffer.frames.push(frame);
        }
        buffer
    }

    /// Appends a frame. Returns `false` (and drops the frame) when full.
    pub fn push(&mut self, frame: CapturedFrame<I>) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(frame);
        true
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn frames(&self) -> &[CapturedFrame<I>] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapturedFrame<I>> {
        self.frames.iter()
    }

    /// Whether the session stopped on its time limit.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Stopped on the time limit before reaching capacity.
    pub fn is_partial(&self) -> bool {
        self.timed_out && !self.is_full()
    }

    /// Wall-clock duration of the session that filled this buffer.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn into_frames(self) -> Vec<CapturedFrame<I>> {
        self.frames
    }

    pub(crate) fn finish(&mut self, timed_out: bool, elapsed: Duration) {
        self.timed_out = timed_out;
        self.elapsed = elapsed;
    }
}

impl<'a, I> IntoIterator for &'a CaptureBuffer<I> {
    type Item = &'a CapturedFrame<I>;
    type IntoIter = std::slice::Iter<'a, CapturedFrame<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
