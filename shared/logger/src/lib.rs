//! Channel-backed logging shared by every SnapSort crate.
//!
//! A [`Logger`] hands formatted records to a dedicated writer thread so the
//! capture and detection threads never block on file I/O.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;
mod settings;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use settings::LogSettings;
