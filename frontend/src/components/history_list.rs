//! History List Component

use chrono::{Local, TimeZone};
use egui::{Color32, RichText, ScrollArea};
use pipeline::CaptureRecord;

/// Newest records first.
pub fn render_history(ui: &mut egui::Ui, records: &[CaptureRecord]) {
    if records.is_empty() {
        ui.label(RichText::new("Nothing captured yet").italics().color(Color32::GRAY));
        return;
    }

    ScrollArea::vertical()
        .id_salt("capture_history")
        .max_height(220.0)
        .show(ui, |ui| {
            for record in records.iter().rev() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("#{}", record.session))
                            .monospace()
                            .color(Color32::from_rgb(96, 165, 250)),
                    );
                    ui.label(RichText::new(&record.title).color(Color32::WHITE));
                    ui.label(
                        RichText::new(format!("{} · {}", record.author, local_time(record.timestamp)))
                            .small()
                            .color(Color32::GRAY),
                    );
                });
            }
        });
}

/// `HH:MM:SS.mmm` in local time for an epoch-millisecond timestamp.
fn local_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%H:%M:%S%.3f").to_string(),
        None => timestamp_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_format() {
        let formatted = local_time(1_700_000_000_123);
        assert_eq!(formatted.len(), "00:00:00.123".len());
        assert!(formatted.ends_with(".123"));
    }
}
