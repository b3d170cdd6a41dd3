//! Detection Overlay Component
//!
//! Paints bounding boxes over the preview image. Boxes arrive in frame
//! pixels and are scaled to whatever size the preview is drawn at.

use egui::{Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};
use pipeline::{BoundingBox, DetectionResult};

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(34, 197, 94),
    Color32::from_rgb(234, 179, 8),
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(168, 85, 247),
    Color32::from_rgb(20, 184, 166),
];

/// Stable color per label so the same class keeps its color across frames.
pub fn overlay_color(label: &str) -> Color32 {
    let hash = label
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[hash % PALETTE.len()]
}

/// Draws every box in `result` inside `target`.
pub fn paint_detections(painter: &Painter, target: Rect, result: &DetectionResult) {
    for bbox in &result.boxes {
        let Some(rect) = project(bbox, result.frame_width, result.frame_height, target) else {
            continue;
        };
        let color = overlay_color(&bbox.label);

        painter.rect_stroke(rect, 2.0, Stroke::new(2.0, color), StrokeKind::Inside);

        let galley = painter.layout_no_wrap(bbox.caption(), FontId::proportional(13.0), Color32::BLACK);
        let label_pos = Pos2::new(rect.left(), (rect.top() - galley.size().y - 2.0).max(target.top()));
        painter.rect_filled(
            Rect::from_min_size(label_pos, galley.size()).expand(2.0),
            2.0,
            color,
        );
        painter.galley(label_pos, galley, Color32::BLACK);
    }
}

/// Maps a box from a `frame_width` x `frame_height` frame onto `target`.
/// `None` when the frame size is unknown or the box is clipped away.
fn project(bbox: &BoundingBox, frame_width: u32, frame_height: u32, target: Rect) -> Option<Rect> {
    if frame_width == 0 || frame_height == 0 {
        return None;
    }
    let sx = target.width() / frame_width as f32;
    let sy = target.height() / frame_height as f32;
    let clipped = bbox
        .clamped(frame_width as f32, frame_height as f32)
        .scaled(sx, sy);
    if clipped.width <= 0.0 || clipped.height <= 0.0 {
        return None;
    }

    Some(Rect::from_min_size(
        Pos2::new(target.left() + clipped.x, target.top() + clipped.y),
        egui::vec2(clipped.width, clipped.height),
    ))
}
