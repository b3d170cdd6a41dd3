//! BGR to RGB conversion
//!
//! OpenCV delivers BGR; the preview and the detector work on RGB.

use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use opencv::core::Mat;
use opencv::prelude::{MatTraitConst, MatTraitConstManual};

/// Converts a captured BGR `Mat` into an RGB [`VideoFrame`].
///
/// # Errors
/// Returns `MediaError::Camera` if the Mat is not 3-channel or not continuous.
pub fn mat_to_frame(mat: &Mat) -> Result<VideoFrame> {
    if mat.channels() != 3 {
        return Err(MediaError::Camera(format!(
            "Expected a 3-channel frame, got {} channels",
            mat.channels()
        )));
    }

    let width = mat.cols() as u32;
    let height = mat.rows() as u32;
    let bgr = mat
        .data_bytes()
        .map_err(|e| MediaError::Camera(format!("Failed to get frame data: {}", e)))?;

    VideoFrame::from_rgb(width, height, bgr_to_rgb(bgr))
}

/// Swaps the first and third byte of every 3-byte pixel.
pub fn bgr_to_rgb(bgr: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bgr.len());
    for pixel in bgr.chunks_exact(3) {
        rgb.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]);
    }
    rgb
}
