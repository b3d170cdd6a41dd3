//! Category Bars Component
//!
//! One row per category: name, count and a bar whose width is the share
//! of the capture capacity the category holds.

use egui::{Color32, ProgressBar, RichText};
use pipeline::CategoryRow;

const BAR_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const NAME_WIDTH: f32 = 110.0;

/// Draws the rows in the order given; the pipeline already sorted them.
pub fn render_category_bars(ui: &mut egui::Ui, rows: &[CategoryRow]) {
    if rows.is_empty() {
        ui.label(
            RichText::new("No categories yet. Press Capture to take a burst.")
                .italics()
                .color(Color32::GRAY),
        );
        return;
    }

    for row in rows {
        ui.horizontal(|ui| {
            ui.add_sized(
                [NAME_WIDTH, 20.0],
                egui::Label::new(RichText::new(&row.name).color(Color32::WHITE)),
            );
            ui.add(
                ProgressBar::new(row.fraction)
                    .fill(BAR_COLOR)
                    .text(row_caption(row)),
            );
        });
    }
}

fn row_caption(row: &CategoryRow) -> String {
    match row.count {
        1 => "1 image".to_string(),
        n => format!("{} images", n),
    }
}
