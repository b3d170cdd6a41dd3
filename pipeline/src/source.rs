//! Frame source abstraction.
//!
//! Both the capture session and the detection loop read from the same
//! device, so the source is shared behind a mutex and every read holds the
//! lock for a single frame only.

use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A live camera feed, or anything that behaves like one.
pub trait FrameSource: Send {
    /// Image handle produced by [`FrameSource::capture_frame`].
    type Image: Send + 'static;

    /// Whether a frame can be read right now. A device still warming up
    /// reports `false`; callers skip the attempt and retry later.
    fn is_ready(&self) -> bool;

    /// Reads one frame. Expected to be fast and synchronous.
    fn capture_frame(&mut self) -> Result<Self::Image>;

    /// Declared frame width in pixels.
    fn width(&self) -> u32;

    /// Declared frame height in pixels.
    fn height(&self) -> u32;
}

/// A frame source shared between the capture and detection threads.
pub type SharedSource<S> = Arc<Mutex<S>>;

/// Wraps a source for sharing.
pub fn shared<S: FrameSource>(source: S) -> SharedSource<S> {
    Arc::new(Mutex::new(source))
}

/// Locks the source, recovering from a poisoned mutex. A panic in one reader
/// leaves the device itself usable.
pub(crate) fn lock<S>(source: &SharedSource<S>) -> MutexGuard<'_, S> {
    source.lock().unwrap_or_else(PoisonError::into_inner)
}
