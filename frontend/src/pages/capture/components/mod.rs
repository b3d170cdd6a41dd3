//! Capture page components.

mod header;
mod placeholder;
mod preview;
mod sidebar;

pub use header::render_header;
pub use preview::render_preview;
pub use sidebar::{SIDEBAR_WIDTH, render_sidebar};
