//! Utility Functions
//!
//! Helper functions for frame conversion.

use egui::{Color32, ColorImage, Vec2};
use media::VideoFrame;

/// Converts an RGB frame to an egui `ColorImage`.
pub fn frame_to_color_image(frame: &VideoFrame) -> ColorImage {
    let (width, height) = (frame.width() as usize, frame.height() as usize);
    let pixels: Vec<Color32> = frame
        .pixels()
        .chunks_exact(3)
        .map(|rgb| Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    ColorImage {
        size: [width, height],
        pixels,
        source_size: Vec2::new(width as f32, height as f32),
    }
}
