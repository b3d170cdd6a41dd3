//! Fixed-cadence detection over a shared frame source.

use super::bounding_box::DetectionResult;
use super::detector::{Detector, DetectorLoader};
use crate::error::{PipelineError, Result};
use crate::scheduler::{Scheduler, TaskHandle, TickControl};
use crate::source::{self, FrameSource, SharedSource};
use crate::state_cell::StateCell;
use logging::Logger;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Default time between detection ticks.
pub const DEFAULT_DETECTION_INTERVAL: Duration = Duration::from_millis(100);

/// Lifecycle of a [`DetectionLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, not started.
    Idle,
    /// Loading the detector. A loop whose load failed stays here.
    Loading,
    /// Publishing results every tick.
    Polling,
    /// Stopped through its handle; never restarts.
    Stopped,
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoopState::Idle => "idle",
            LoopState::Loading => "loading",
            LoopState::Polling => "polling",
            LoopState::Stopped => "stopped",
        };
        write!(f, "{}", s)
    }
}

/// Polls the source on a scheduled task, runs the detector on each frame
/// and publishes the latest [`DetectionResult`].
///
/// Each tick holds the source lock only while reading one frame; detection
/// itself runs unlocked so capture sessions are not held up by inference.
pub struct DetectionLoop<S: FrameSource + 'static> {
    source: SharedSource<S>,
    loader: Option<DetectorLoader<S::Image>>,
    results: StateCell<DetectionResult>,
    state: Arc<Mutex<LoopState>>,
    last_error: Arc<Mutex<Option<PipelineError>>>,
    interval: Duration,
    scheduler: Scheduler,
    task: Option<TaskHandle>,
    logger: Logger,
}

impl<S: FrameSource + 'static> DetectionLoop<S> {
    pub fn new(
        source: SharedSource<S>,
        loader: DetectorLoader<S::Image>,
        interval: Duration,
        scheduler: Scheduler,
        logger: Logger,
    ) -> Self {
        Self {
            source,
            loader: Some(loader),
            results: StateCell::default(),
            state: Arc::new(Mutex::new(LoopState::Idle)),
            last_error: Arc::new(Mutex::new(None)),
            interval,
            scheduler,
            task: None,
            logger,
        }
    }

    /// Starts the loop. Calling it again, or after [`DetectionLoop::stop`],
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Scheduler`] if the task cannot be spawned;
    /// the loop is then stopped.
    pub fn start(&mut self) -> Result<()> {
        if self.state() != LoopState::Idle {
            self.logger
                .debug(&format!("start() ignored, loop is {}", self.state()));
            return Ok(());
        }
        let Some(loader) = self.loader.take() else {
            return Ok(());
        };

        self.set_state(LoopState::Loading);
        self.logger.info(&format!(
            "Detection loop starting ({} ms interval)",
            self.interval.as_millis()
        ));

        let tick = DetectionTick {
            source: Arc::clone(&self.source),
            loader: Some(loader),
            detector: None,
            results: self.results.clone(),
            state: Arc::clone(&self.state),
            last_error: Arc::clone(&self.last_error),
            logger: self.logger.clone(),
        };

        match self
            .scheduler
            .spawn_repeating("detection-loop", self.interval, tick.into_fn())
        {
            Ok(handle) => {
                self.task = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!("Detection loop not started: {}", e));
                *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = Some(e.clone());
                self.set_state(LoopState::Stopped);
                Err(e)
            }
        }
    }

    /// Cancels the task and waits for it to exit.
    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.stop();
        }
        if self.state() != LoopState::Stopped {
            self.set_state(LoopState::Stopped);
            self.logger.info("Detection loop stopped");
        }
    }

    pub fn state(&self) -> LoopState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The error that left the loop inert, if any.
    pub fn last_error(&self) -> Option<PipelineError> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cell holding the latest result. Version 0 means nothing was published.
    pub fn results(&self) -> StateCell<DetectionResult> {
        self.results.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn set_state(&self, state: LoopState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

impl<S: FrameSource + 'static> Drop for DetectionLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State owned by the detection task.
struct DetectionTick<S: FrameSource> {
    source: SharedSource<S>,
    loader: Option<DetectorLoader<S::Image>>,
    detector: Option<Box<dyn Detector<S::Image>>>,
    results: StateCell<DetectionResult>,
    state: Arc<Mutex<LoopState>>,
    last_error: Arc<Mutex<Option<PipelineError>>>,
    logger: Logger,
}

impl<S: FrameSource + 'static> DetectionTick<S> {
    fn into_fn(mut self) -> impl FnMut() -> TickControl + Send + 'static {
        move || self.tick()
    }

    fn tick(&mut self) -> TickControl {
        if self.detector.is_none() {
            return self.load();
        }
        if let Some(detector) = self.detector.as_mut() {
            poll_once(&self.source, detector.as_mut(), &self.results, &self.logger);
        }
        TickControl::Continue
    }

    fn load(&mut self) -> TickControl {
        let Some(loader) = self.loader.take() else {
            return TickControl::Stop;
        };

        match loader() {
            Ok(detector) => {
                self.logger
                    .info(&format!("Detector '{}' loaded", detector.name()));
                self.detector = Some(detector);
                *self.state.lock().unwrap_or_else(PoisonError::into_inner) = LoopState::Polling;
                TickControl::Continue
            }
            Err(e) => {
                self.logger
                    .error(&format!("Detector load failed, overlay disabled: {}", e));
                *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = Some(e);
                TickControl::Stop
            }
        }
    }
}

/// One detection tick. Returns whether a result was published.
fn poll_once<S: FrameSource>(
    source: &SharedSource<S>,
    detector: &mut dyn Detector<S::Image>,
    results: &StateCell<DetectionResult>,
    logger: &Logger,
) -> bool {
    let (frame, width, height) = {
        let mut source = source::lock(source);
        if !source.is_ready() {
            return false;
        }
        match source.capture_frame() {
            Ok(frame) => (frame, source.width(), source.height()),
            Err(e) => {
                logger.debug(&format!("Detection frame skipped: {}", e));
                return false;
            }
        }
    };

    match detector.detect(&frame) {
        Ok(boxes) => {
            results.publish(DetectionResult::new(boxes, width, height));
            true
        }
        Err(e) => {
            logger.warn(&format!("Detection failed: {}", e));
            false
        }
    }
}
