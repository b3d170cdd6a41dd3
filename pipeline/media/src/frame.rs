//! Video frame representation.

use crate::error::{MediaError, Result};
use opencv::core::Mat;
use opencv::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// One decoded camera frame as packed RGB8.
///
/// Pixels sit behind an `Arc`, so cloning a frame for the preview, the
/// detector and a capture buffer never copies the image.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pixels: Arc<Vec<u8>>,
    width: u32,
    height: u32,
    captured_at: Instant,
}

impl VideoFrame {
    /// Wraps RGB pixels.
    ///
    /// # Errors
    /// Returns `MediaError::Camera` if the buffer length is not `width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(MediaError::Camera(format!(
                "Frame buffer holds {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        Ok(VideoFrame {
            pixels: Arc::new(pixels),
            width,
            height,
            captured_at: Instant::now(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Time the frame was read from the device.
    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }

    /// Packed RGB8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copies the frame into a 3-channel `Mat` (RGB order) for OpenCV.
    pub fn to_mat(&self) -> Result<Mat> {
        let flat = Mat::from_slice(self.pixels())?;
        let shaped = flat.reshape(3, self.height as i32)?;
        Ok(shaped.try_clone()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_checks_length() {
        assert!(VideoFrame::from_rgb(2, 2, vec![0; 12]).is_ok());
        let result = VideoFrame::from_rgb(2, 2, vec![0; 11]);
        assert!(matches!(result, Err(MediaError::Camera(_))));
    }

    #[test]
    fn test_clone_shares_pixels() {
        let frame = VideoFrame::from_rgb(1, 1, vec![1, 2, 3]).unwrap();
        let copy = frame.clone();
        assert_eq!(copy.pixels().as_ptr(), frame.pixels().as_ptr());
        assert_eq!(copy.captured_at(), frame.captured_at());
    }

    #[test]
    fn test_to_mat_dimensions() {
        let frame = VideoFrame::from_rgb(4, 2, vec![7; 24]).unwrap();
        let mat = frame.to_mat().unwrap();

        assert_eq!(mat.cols(), 4);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.channels(), 3);
    }
}
