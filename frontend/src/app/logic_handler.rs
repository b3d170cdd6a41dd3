//! Handles events from the background logic thread.

use super::state::App;
use crate::events::LogicEvent;
use pipeline::{CaptureRecord, CaptureSummary, PipelineError};

impl App {
    /// Updates application state from background operations
    pub(super) fn handle_logic_event(&mut self, ctx: &egui::Context, event: LogicEvent) {
        match event {
            LogicEvent::PipelineReady {
                feed,
                width,
                height,
            } => {
                self.logger
                    .info(&format!("Pipeline ready, camera {}x{}", width, height));
                self.feed = Some(feed);
                self.camera_size = Some((width, height));
                self.camera_error = None;
            }

            LogicEvent::CameraUnavailable(msg) => {
                self.logger.error(&format!("Camera unavailable: {}", msg));
                self.show_error(format!("Camera unavailable: {}", msg));
                self.camera_error = Some(msg);
            }

            LogicEvent::PreviewFrame(color_image) => {
                self.handle_preview_frame(ctx, color_image);
            }

            LogicEvent::CaptureStarted => {
                self.capturing = true;
            }

            LogicEvent::CaptureFinished { summary, records } => {
                self.handle_capture_finished(summary, records);
            }

            LogicEvent::CaptureRejected(err) => {
                self.logger.warn(&format!("Capture rejected: {}", err));
                self.capturing = capturing_after_rejection(self.capturing, &err);
                self.show_warning(err.to_string());
            }

            LogicEvent::DetectorFailed(msg) => {
                self.logger.error(&format!("Detector failed: {}", msg));
                self.show_error(format!("Object detection disabled: {}", msg));
                self.detector_error = Some(msg);
            }
        }
    }

    fn handle_preview_frame(&mut self, ctx: &egui::Context, color_image: egui::ColorImage) {
        match &mut self.preview {
            Some(texture) => {
                texture.set(color_image, egui::TextureOptions::default());
            }
            None => {
                self.preview = Some(ctx.load_texture(
                    "preview_frame",
                    color_image,
                    egui::TextureOptions::default(),
                ));
            }
        }
    }

    fn handle_capture_finished(&mut self, summary: CaptureSummary, records: Vec<CaptureRecord>) {
        self.capturing = false;
        append_history(
            &mut self.history,
            records,
            self.config.pipeline.history_limit,
        );

        if summary.frames == 0 {
            self.show_warning("No frames captured, the camera was not ready".to_string());
        } else if summary.partial {
            self.show_warning(format!(
                "Partial capture: {} of {} frames before the time limit",
                summary.frames, self.config.pipeline.capture.max_frames
            ));
        } else {
            self.show_success(format!(
                "Captured {} frames into {} categories",
                summary.frames, summary.categories
            ));
        }
        self.last_summary = Some(summary);
    }
}

/// A rejection because another cycle is running leaves that cycle's
/// button state alone; any other rejection ends the pending capture.
fn capturing_after_rejection(capturing: bool, error: &PipelineError) -> bool {
    match error {
        PipelineError::CaptureInProgress => capturing,
        _ => false,
    }
}

/// Appends records, dropping the oldest beyond `limit`.
fn append_history(history: &mut Vec<CaptureRecord>, records: Vec<CaptureRecord>, limit: usize) {
    history.extend(records);
    if history.len() > limit {
        let excess = history.len() - limit;
        history.drain(..excess);
    }
}
