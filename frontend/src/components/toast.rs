//! Pipeline notifications.
//!
//! One toast at a time in the bottom-right corner: a finished capture
//! (success), a partial or rejected capture (warning), a missing camera or
//! a detector that never loaded (error). Errors stay up longer since the
//! overlay or the whole pipeline stays down afterwards.

use egui::{Align2, Color32, RichText, Stroke};
use std::time::{Duration, Instant};

const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);
const ERROR_LIFETIME: Duration = Duration::from_secs(8);

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn title(self) -> &'static str {
        match self {
            ToastKind::Success => "Capture complete",
            ToastKind::Warning => "Notice",
            ToastKind::Error => "Pipeline error",
        }
    }

    fn accent(self) -> Color32 {
        match self {
            ToastKind::Success => Color32::from_rgb(74, 222, 128),
            ToastKind::Warning => Color32::from_rgb(250, 204, 21),
            ToastKind::Error => Color32::from_rgb(248, 113, 113),
        }
    }

    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Error => ERROR_LIFETIME,
            _ => DEFAULT_LIFETIME,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
            lifetime: kind.lifetime(),
        }
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.lifetime
    }

    /// Draws the toast. Returns `true` once it expired or was dismissed.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired() {
            return true;
        }

        let accent = self.kind.accent();
        let mut dismissed = false;

        egui::Window::new("pipeline_toast")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .fixed_size(egui::vec2(340.0, 70.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(Color32::from_rgb(30, 41, 59))
                    .stroke(Stroke::new(1.5, accent))
                    .corner_radius(6.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.kind.title()).strong().color(accent));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("x").clicked();
                    });
                });
                ui.label(RichText::new(&self.message).color(Color32::WHITE));
            });

        // Keep repainting so the toast disappears on time without input.
        ctx.request_repaint_after(Duration::from_millis(250));

        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_last_longer() {
        assert_eq!(Toast::error("e".to_string()).lifetime, ERROR_LIFETIME);
        assert_eq!(Toast::warning("w".to_string()).lifetime, DEFAULT_LIFETIME);
        assert_eq!(Toast::success("s".to_string()).lifetime, DEFAULT_LIFETIME);
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Toast::success("Captured 25 frames".to_string());
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_zero_lifetime_expires() {
        let mut toast = Toast::warning("Partial capture".to_string());
        toast.lifetime = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(5));
        assert!(toast.is_expired());
    }
}
