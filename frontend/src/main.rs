//! SnapSort desktop entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod logic;
mod pages;

use app::App;
use config::AppConfig;
use logging::Logger;

fn main() {
    let (config, unknown_keys) = match AppConfig::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let logger = match Logger::from_settings(&config.log) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    for key in &unknown_keys {
        logger.warn(&format!("Ignoring unknown config key '{}'", key));
    }
    logger.info(&format!(
        "Configuration loaded - camera: {:?}, max frames: {}, detection every {:?}",
        config.camera.device_id, config.pipeline.capture.max_frames, config.pipeline.detection_interval
    ));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("SnapSort"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "SnapSort",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            // Dark theme with blue tones
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(config, logger)))
        }),
    );

    if let Err(e) = result {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
