// Main logic thread coordinator

mod preview;
mod state;
mod utils;

use crate::config::AppConfig;
use crate::events::{LogicCommand, LogicEvent};
use logging::Logger;
use media::{Camera, SsdDetector};
use pipeline::source::shared;
use pipeline::{
    CaptureController, DetectionLoop, DisplayFeed, FrameSource, Partitioner, PipelineError,
    Scheduler,
};
use preview::spawn_preview;
use state::LogicState;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// How often the logic thread checks on the detector between commands.
const WATCH_INTERVAL: Duration = Duration::from_millis(250);

/// Main function of the logic thread.
/// Receives `LogicCommand`s and sends `LogicEvent`s back to the UI thread.
pub fn run_logic_thread(
    cmd_rx: Receiver<LogicCommand>,
    evt_tx: Sender<LogicEvent>,
    config: AppConfig,
    logger: Logger,
) {
    let mut state = LogicState::new(logger.for_component("Logic"));
    start_pipeline(&mut state, &config, &evt_tx, &logger);

    loop {
        match cmd_rx.recv_timeout(WATCH_INTERVAL) {
            Ok(LogicCommand::Capture) => handle_capture(&state, &evt_tx),
            Ok(LogicCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        report_detector_failure(&mut state, &evt_tx);
    }

    state.cleanup();
}

/// Opens the camera and wires the detection loop, capture controller and
/// preview onto it.
fn start_pipeline(
    state: &mut LogicState,
    config: &AppConfig,
    evt_tx: &Sender<LogicEvent>,
    logger: &Logger,
) {
    let camera = match Camera::open(config.camera.clone(), logger.for_component("Camera")) {
        Ok(camera) => camera,
        Err(e) => {
            state.logger.error(&format!("Camera unavailable: {}", e));
            let _ = evt_tx.send(LogicEvent::CameraUnavailable(e.to_string()));
            return;
        }
    };

    let (width, height) = (camera.width(), camera.height());
    let fps = if camera.fps() > 0.0 {
        camera.fps()
    } else {
        config.camera.fps
    };
    let source = shared(camera);
    let scheduler = Scheduler::new(logger.for_component("Scheduler"));

    let mut detection = DetectionLoop::new(
        Arc::clone(&source),
        SsdDetector::loader(config.detector.clone(), logger.for_component("Detector")),
        config.pipeline.detection_interval,
        scheduler.clone(),
        logger.for_component("Detection"),
    );
    if let Err(e) = detection.start() {
        let _ = evt_tx.send(LogicEvent::DetectorFailed(e.to_string()));
        state.detector_failure_reported = true;
    }

    let controller = Arc::new(CaptureController::new(
        Arc::clone(&source),
        Partitioner::random(config.pipeline.seed),
        &config.pipeline,
        logger.for_component("Capture"),
    ));

    match spawn_preview(
        &scheduler,
        Arc::clone(&source),
        fps,
        evt_tx.clone(),
        logger.for_component("Preview"),
    ) {
        Ok(handle) => state.preview = Some(handle),
        Err(e) => state.logger.error(&format!("Preview not started: {}", e)),
    }

    let feed = DisplayFeed::new(
        controller.categories(),
        detection.results(),
        controller.capacity(),
    );
    let _ = evt_tx.send(LogicEvent::PipelineReady {
        feed,
        width,
        height,
    });

    state.detection = Some(detection);
    state.controller = Some(controller);
    state.logger.info("Pipeline ready");
}

/// Runs a capture cycle on its own thread so the logic thread keeps
/// answering commands. Overlapping requests are rejected, never queued.
fn handle_capture(state: &LogicState, evt_tx: &Sender<LogicEvent>) {
    let Some(controller) = state.controller.clone() else {
        let _ = evt_tx.send(LogicEvent::CaptureRejected(PipelineError::SourceNotReady));
        return;
    };

    if controller.is_busy() {
        state
            .logger
            .warn("Capture requested while another capture is running");
        let _ = evt_tx.send(LogicEvent::CaptureRejected(PipelineError::CaptureInProgress));
        return;
    }

    let tx = evt_tx.clone();
    let spawned = thread::Builder::new()
        .name("capture".to_string())
        .spawn(move || {
            let _ = tx.send(LogicEvent::CaptureStarted);
            let event = match controller.capture() {
                Ok(summary) => {
                    let records = controller
                        .history()
                        .into_iter()
                        .filter(|record| record.session == summary.session)
                        .collect();
                    LogicEvent::CaptureFinished { summary, records }
                }
                Err(e) => LogicEvent::CaptureRejected(e),
            };
            let _ = tx.send(event);
        });

    if let Err(e) = spawned {
        state
            .logger
            .error(&format!("Failed to spawn capture thread: {}", e));
        let _ = evt_tx.send(LogicEvent::CaptureRejected(PipelineError::Scheduler(
            e.to_string(),
        )));
    }
}

/// Tells the UI once if the detector never loaded.
fn report_detector_failure(state: &mut LogicState, evt_tx: &Sender<LogicEvent>) {
    if state.detector_failure_reported {
        return;
    }
    if let Some(detection) = &state.detection
        && let Some(error) = detection.last_error()
    {
        state.detector_failure_reported = true;
        let _ = evt_tx.send(LogicEvent::DetectorFailed(error.to_string()));
    }
}
