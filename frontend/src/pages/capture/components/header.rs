//! Capture Header Component
//!
//! Title plus camera and detector status.

use crate::pages::CaptureView;
use egui::{Color32, FontId, RichText};

pub fn render_header(ui: &mut egui::Ui, view: &CaptureView) {
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new("SnapSort")
                .font(FontId::proportional(32.0))
                .color(Color32::WHITE),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(20.0);
            render_detector_status(ui, view);
            ui.add_space(16.0);
            render_camera_status(ui, view);
        });
    });
}

fn render_camera_status(ui: &mut egui::Ui, view: &CaptureView) {
    let (text, color) = match (view.camera_size, view.camera_error) {
        (Some((w, h)), _) => (format!("Camera {}x{}", w, h), Color32::LIGHT_GRAY),
        (None, Some(_)) => ("Camera unavailable".to_string(), Color32::from_rgb(248, 113, 113)),
        (None, None) => ("Opening camera...".to_string(), Color32::GRAY),
    };
    ui.label(RichText::new(text).font(FontId::proportional(16.0)).color(color));
}

fn render_detector_status(ui: &mut egui::Ui, view: &CaptureView) {
    let (text, color) = if view.detector_error.is_some() {
        ("Detector off".to_string(), Color32::from_rgb(248, 113, 113))
    } else {
        match view.detections.boxes.len() {
            0 => ("No objects".to_string(), Color32::GRAY),
            1 => ("1 object".to_string(), Color32::from_rgb(74, 222, 128)),
            n => (format!("{} objects", n), Color32::from_rgb(74, 222, 128)),
        }
    };
    ui.label(RichText::new(text).font(FontId::proportional(16.0)).color(color));
}
