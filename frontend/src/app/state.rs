//! Application State
//!
//! Defines the main application state and the MVU loop.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Process events from the logic thread (non-blocking)
//! 2. Pull new pipeline output into the dashboard
//! 3. Render the capture page (pure function of the state)
//! 4. Handle the UI command returned by the view

use super::dashboard::Dashboard;
use crate::components::Toast;
use crate::config::AppConfig;
use crate::events::{LogicCommand, LogicEvent, UiCommand};
use crate::pages::{CapturePage, CaptureView};
use egui::TextureHandle;
use logging::Logger;
use media::VideoFrame;
use pipeline::{CaptureRecord, CaptureSummary, DisplayFeed};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

/// Repaint cadence while the preview is live.
const REPAINT_INTERVAL: Duration = Duration::from_millis(33);

/// Main application state - MVU Controller
pub struct App {
    pub(super) config: AppConfig,
    pub(super) logger: Logger,

    // UI State
    pub(super) current_toast: Option<Toast>,
    pub(super) show_overlay: bool,
    pub(super) capturing: bool,

    // Logic Thread Communication
    pub(super) logic_cmd_tx: Sender<LogicCommand>,
    pub(super) logic_evt_rx: Receiver<LogicEvent>,

    // Pipeline output
    pub(super) feed: Option<DisplayFeed<VideoFrame>>,
    pub(super) dashboard: Dashboard,
    pub(super) preview: Option<TextureHandle>,
    pub(super) camera_size: Option<(u32, u32)>,
    pub(super) camera_error: Option<String>,
    pub(super) detector_error: Option<String>,
    pub(super) last_summary: Option<CaptureSummary>,
    pub(super) history: Vec<CaptureRecord>,
}

impl App {
    /// Creates the app and starts the logic thread that owns the pipeline.
    pub fn new(config: AppConfig, logger: Logger) -> Self {
        let logger = logger.for_component("App");
        logger.info("Initializing application...");

        let (logic_cmd_tx, logic_cmd_rx) = channel();
        let (logic_evt_tx, logic_evt_rx) = channel();

        logger.info("Starting logic thread...");
        let logic_config = config.clone();
        let logic_logger = logger.clone();
        let spawned = std::thread::Builder::new()
            .name("logic".to_string())
            .spawn(move || {
                crate::logic::run_logic_thread(logic_cmd_rx, logic_evt_tx, logic_config, logic_logger);
            });

        let mut app = Self {
            config,
            logger: logger.clone(),
            current_toast: None,
            show_overlay: true,
            capturing: false,
            logic_cmd_tx,
            logic_evt_rx,
            feed: None,
            dashboard: Dashboard::new(),
            preview: None,
            camera_size: None,
            camera_error: None,
            detector_error: None,
            last_summary: None,
            history: Vec::new(),
        };

        if let Err(e) = spawned {
            logger.error(&format!("Failed to start logic thread: {}", e));
            app.camera_error = Some(format!("Logic thread not started: {}", e));
        }

        logger.info("Application initialized");
        app
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Process all pending logic events
        while let Ok(event) = self.logic_evt_rx.try_recv() {
            self.handle_logic_event(ctx, event);
        }

        // 2. Pull pipeline output if a cell changed
        if let Some(feed) = &mut self.feed {
            feed.push_to(&mut self.dashboard);
        }

        // 3. Render the view and collect the UI command
        let ui_command = self.render_view(ctx);

        // 4. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
        }

        // 5. Render toast notification (if any)
        self.render_toast(ctx);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("Application shutting down...");
        let _ = self.logic_cmd_tx.send(LogicCommand::Shutdown);
        self.logger.info("Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the capture page and returns any UI command
    fn render_view(&mut self, ctx: &egui::Context) -> Option<UiCommand> {
        let view = CaptureView {
            preview: self.preview.as_ref(),
            camera_size: self.camera_size,
            camera_error: self.camera_error.as_deref(),
            detector_error: self.detector_error.as_deref(),
            detections: &self.dashboard.detections,
            show_overlay: self.show_overlay,
            rows: &self.dashboard.rows,
            history: &self.history,
            last_summary: self.last_summary.as_ref(),
            capturing: self.capturing,
        };

        let mut ui_command = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui_command = CapturePage::show(ui, &view);
        });
        ui_command
    }

    fn render_toast(&mut self, ctx: &egui::Context) {
        // show() returns true if the user dismissed it or it expired
        if let Some(toast) = &self.current_toast {
            if toast.show(ctx) {
                self.current_toast = None;
            }
        }
    }

    pub(super) fn show_error(&mut self, message: String) {
        self.current_toast = Some(Toast::error(message));
    }

    pub(super) fn show_warning(&mut self, message: String) {
        self.current_toast = Some(Toast::warning(message));
    }

    pub(super) fn show_success(&mut self, message: String) {
        self.current_toast = Some(Toast::success(message));
    }
}
