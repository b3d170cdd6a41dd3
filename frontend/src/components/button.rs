//! Sidebar buttons.
//!
//! `Primary` is the large Capture action, `Secondary` the small history
//! actions. A disabled button keeps its size but drops to a muted fill, so
//! the sidebar layout does not jump while a capture runs.

use egui::{Color32, FontId, RichText, Vec2};

const DISABLED_FILL: Color32 = Color32::from_rgb(51, 65, 85);
const DISABLED_TEXT: Color32 = Color32::from_rgb(148, 163, 184);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn fill(self, enabled: bool) -> Color32 {
        match (self, enabled) {
            (_, false) => DISABLED_FILL,
            (ButtonVariant::Primary, true) => Color32::from_rgb(37, 99, 235),
            (ButtonVariant::Secondary, true) => Color32::from_rgb(71, 85, 105),
        }
    }

    fn text_size(self) -> f32 {
        match self {
            ButtonVariant::Primary => 18.0,
            ButtonVariant::Secondary => 13.0,
        }
    }
}

pub struct Button {
    label: String,
    variant: ButtonVariant,
    min_size: Option<Vec2>,
    enabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            min_size: None,
            enabled: true,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Disabled buttons never report clicks.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let text_color = if self.enabled {
            Color32::WHITE
        } else {
            DISABLED_TEXT
        };
        let text = RichText::new(self.label)
            .font(FontId::proportional(self.variant.text_size()))
            .color(text_color);

        let mut widget = egui::Button::new(text)
            .fill(self.variant.fill(self.enabled))
            .corner_radius(6.0);
        if let Some(size) = self.min_size {
            widget = widget.min_size(size);
        }

        ui.add_enabled(self.enabled, widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_fill_shared_by_variants() {
        assert_eq!(ButtonVariant::Primary.fill(false), DISABLED_FILL);
        assert_eq!(ButtonVariant::Secondary.fill(false), DISABLED_FILL);
        assert_ne!(
            ButtonVariant::Primary.fill(true),
            ButtonVariant::Secondary.fill(true)
        );
    }

    #[test]
    fn test_capture_button_is_larger() {
        assert!(ButtonVariant::Primary.text_size() > ButtonVariant::Secondary.text_size());
    }
}
