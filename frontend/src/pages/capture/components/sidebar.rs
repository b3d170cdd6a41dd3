//! Capture Sidebar Component
//!
//! Capture button, result of the last cycle, category rows and history.

use crate::components::{Button, ButtonVariant, render_category_bars, render_history};
use crate::events::UiCommand;
use crate::pages::CaptureView;
use egui::{Color32, FontId, RichText, Vec2};
use pipeline::CaptureSummary;

pub const SIDEBAR_WIDTH: f32 = 380.0;

pub fn render_sidebar(ui: &mut egui::Ui, view: &CaptureView) -> Option<UiCommand> {
    let mut command = None;

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        let label = if view.capturing { "Capturing..." } else { "Capture" };
        if Button::new(label)
            .variant(ButtonVariant::Primary)
            .min_size(Vec2::new(SIDEBAR_WIDTH - 40.0, 44.0))
            .enabled(view.can_capture())
            .show(ui)
            .clicked()
        {
            command = Some(UiCommand::Capture);
        }
    });

    ui.add_space(8.0);
    let mut overlay = view.show_overlay;
    if ui.checkbox(&mut overlay, "Show detections").changed() {
        command = Some(UiCommand::ToggleOverlay);
    }

    if let Some(summary) = view.last_summary {
        ui.add_space(8.0);
        ui.label(
            RichText::new(summary_text(summary))
                .font(FontId::proportional(14.0))
                .color(Color32::LIGHT_GRAY),
        );
    }

    section_title(ui, "Categories");
    render_category_bars(ui, view.rows);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("History")
                .font(FontId::proportional(18.0))
                .color(Color32::WHITE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if Button::new("Clear")
                .variant(ButtonVariant::Secondary)
                .enabled(!view.history.is_empty())
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::ClearHistory);
            }
        });
    });
    ui.separator();
    render_history(ui, view.history);

    command
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(
        RichText::new(title)
            .font(FontId::proportional(18.0))
            .color(Color32::WHITE),
    );
    ui.separator();
}

fn summary_text(summary: &CaptureSummary) -> String {
    let mut text = format!(
        "Capture #{}: {} frames in {} categories ({:.1}s)",
        summary.session,
        summary.frames,
        summary.categories,
        summary.elapsed.as_secs_f32()
    );
    if summary.partial {
        text.push_str(", stopped at the time limit");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn summary(frames: usize, partial: bool) -> CaptureSummary {
        CaptureSummary {
            session: 3,
            frames,
            categories: 2,
            timed_out: partial,
            partial,
            elapsed: Duration::from_millis(1500),
            version: 3,
        }
    }

    #[test]
    fn test_summary_text_full() {
        assert_eq!(
            summary_text(&summary(25, false)),
            "Capture #3: 25 frames in 2 categories (1.5s)"
        );
    }

    #[test]
    fn test_summary_text_partial() {
        assert!(summary_text(&summary(12, true)).ends_with("stopped at the time limit"));
    }
}
