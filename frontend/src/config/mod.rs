//! Configuration Module
//!
//! Loads `snapsort.conf` into the settings of every crate in the app.

mod app_config;

pub use app_config::AppConfig;
