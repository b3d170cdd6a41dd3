//! Reusable UI components.

mod button;
mod category_bars;
mod detection_overlay;
mod history_list;
mod toast;

pub use button::{Button, ButtonVariant};
pub use category_bars::render_category_bars;
pub use detection_overlay::paint_detections;
pub use history_list::render_history;
pub use toast::Toast;
