//! Capture Page
//!
//! Live preview with the detection overlay on the left, capture controls,
//! category rows and history on the right.

mod components;

use crate::events::UiCommand;
use egui::TextureHandle;
use pipeline::{CaptureRecord, CaptureSummary, CategoryRow, DetectionResult};

/// Everything the page draws. Borrowed from the app state each frame.
pub struct CaptureView<'a> {
    pub preview: Option<&'a TextureHandle>,
    pub camera_size: Option<(u32, u32)>,
    pub camera_error: Option<&'a str>,
    pub detector_error: Option<&'a str>,
    pub detections: &'a DetectionResult,
    pub show_overlay: bool,
    pub rows: &'a [CategoryRow],
    pub history: &'a [CaptureRecord],
    pub last_summary: Option<&'a CaptureSummary>,
    pub capturing: bool,
}

impl CaptureView<'_> {
    /// A capture can start once the camera is up and no cycle is running.
    pub fn can_capture(&self) -> bool {
        self.camera_size.is_some() && !self.capturing
    }
}

pub struct CapturePage;

impl CapturePage {
    pub fn show(ui: &mut egui::Ui, view: &CaptureView) -> Option<UiCommand> {
        let mut command = None;

        egui::SidePanel::right("capture_sidebar")
            .resizable(false)
            .exact_width(components::SIDEBAR_WIDTH)
            .show_inside(ui, |ui| {
                if let Some(cmd) = components::render_sidebar(ui, view) {
                    command = Some(cmd);
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.vertical(|ui| {
                ui.add_space(20.0);
                components::render_header(ui, view);
                ui.add_space(20.0);
                components::render_preview(ui, view);
            });
        });

        command
    }
}
