//! Live Preview
//!
//! Reads camera frames at the camera's frame rate on a scheduled task and
//! forwards them to the UI for display.

use super::utils::frame_to_color_image;
use crate::events::LogicEvent;
use logging::Logger;
use media::Camera;
use pipeline::{FrameSource, PipelineError, Result, Scheduler, SharedSource, TaskHandle, TickControl};
use std::sync::PoisonError;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Starts the preview task.
///
/// The task ends by itself once the UI side of the channel is gone. Read
/// errors are logged once per streak rather than on every tick.
pub fn spawn_preview(
    scheduler: &Scheduler,
    camera: SharedSource<Camera>,
    fps: f64,
    evt_tx: Sender<LogicEvent>,
    logger: Logger,
) -> Result<TaskHandle> {
    let frame_duration = Duration::from_secs_f64(1.0 / fps.max(1.0));
    let mut failing = false;

    scheduler.spawn_repeating("preview", frame_duration, move || {
        let frame = {
            let mut camera = camera.lock().unwrap_or_else(PoisonError::into_inner);
            if !camera.is_ready() {
                return TickControl::Continue;
            }
            camera.capture_frame()
        };

        match frame {
            Ok(frame) => {
                failing = false;
                let image = frame_to_color_image(&frame);
                if evt_tx.send(LogicEvent::PreviewFrame(image)).is_err() {
                    return TickControl::Stop;
                }
            }
            Err(PipelineError::Capture(msg)) if !failing => {
                failing = true;
                logger.warn(&format!("Preview read failed: {}", msg));
            }
            Err(_) => {}
        }
        TickControl::Continue
    })
}
