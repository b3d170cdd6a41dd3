//! Application Module - MVU Controller
//!
//! Coordinates the capture page and the background logic thread.
//!
//! # Structure
//!
//! - `state.rs`: Application state and the MVU loop
//! - `dashboard.rs`: Renderer fed by the pipeline cells
//! - `ui_handler.rs`: Dispatcher for UI commands
//! - `logic_handler.rs`: Processes events from the logic thread
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> State mutation
//!                                          \--> LogicCommand --> Logic thread
//!
//! Logic thread --> LogicEvent --> logic_handler --> State update (texture, history)
//! Pipeline cells --> DisplayFeed --> Dashboard (categories, detections)
//! ```

mod dashboard;
mod logic_handler;
mod state;
mod ui_handler;

pub use state::App;
