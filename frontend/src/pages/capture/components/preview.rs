//! Preview Component
//!
//! The live camera image, letterboxed to the available width, with the
//! detection overlay painted on top.

use super::placeholder::render_placeholder;
use crate::components::paint_detections;
use crate::pages::CaptureView;
use egui::Vec2;

const DEFAULT_ASPECT: f32 = 0.75;

pub fn render_preview(ui: &mut egui::Ui, view: &CaptureView) {
    let size = fit_size(ui.available_width() - 40.0, aspect(view));

    ui.horizontal(|ui| {
        ui.add_space(20.0);

        let Some(texture) = view.preview else {
            let text = match view.camera_error {
                Some(_) => "Camera unavailable",
                None => "Camera Starting...",
            };
            render_placeholder(ui, size.x, size.y, text);
            return;
        };

        let response = ui.image((texture.id(), size));
        if view.show_overlay {
            paint_detections(ui.painter(), response.rect, view.detections);
        }
    });

    if let Some(error) = view.camera_error {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.colored_label(egui::Color32::from_rgb(248, 113, 113), error);
        });
    }
}

/// Height over width of the camera image.
fn aspect(view: &CaptureView) -> f32 {
    match view.camera_size {
        Some((w, h)) if w > 0 => h as f32 / w as f32,
        _ => DEFAULT_ASPECT,
    }
}

fn fit_size(width: f32, aspect: f32) -> Vec2 {
    let width = width.max(160.0);
    Vec2::new(width, width * aspect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_keeps_aspect() {
        assert_eq!(fit_size(640.0, 0.5625), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_fit_size_minimum_width() {
        assert_eq!(fit_size(10.0, 0.75), Vec2::new(160.0, 120.0));
    }
}
