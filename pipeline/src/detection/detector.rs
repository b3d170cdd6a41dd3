//! Detector abstraction.

use super::bounding_box::BoundingBox;
use crate::error::Result;

/// An object detector over images of type `I`.
///
/// Implementations filter by their own confidence threshold; the loop
/// publishes whatever they return.
pub trait Detector<I>: Send {
    fn detect(&mut self, frame: &I) -> Result<Vec<BoundingBox>>;

    /// Short model name for logs.
    fn name(&self) -> &str;
}

/// One-shot detector construction, run on the detection task so model
/// loading never blocks the caller.
pub type DetectorLoader<I> = Box<dyn FnOnce() -> Result<Box<dyn Detector<I>>> + Send>;
