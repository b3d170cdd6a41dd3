//! Integration tests for the detection loop
//!
//! Covers the loop lifecycle against scripted sources and detectors:
//! - Idempotent start
//! - Detector load failure leaving the loop inert
//! - Unready sources publishing nothing
//! - Results carrying frame dimensions
//! - Stop and drop

use logging::Logger;
use pipeline::source::shared;
use pipeline::{
    BoundingBox, DetectionLoop, Detector, DetectorLoader, FrameSource, LoopState, PipelineError,
    Result, Scheduler,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(5);

struct StillCamera {
    ready: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
}

impl FrameSource for StillCamera {
    type Image = Vec<u8>;

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn capture_frame(&mut self) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0; 16])
    }

    fn width(&self) -> u32 {
        1280
    }

    fn height(&self) -> u32 {
        720
    }
}

struct PersonDetector;

impl Detector<Vec<u8>> for PersonDetector {
    fn detect(&mut self, _frame: &Vec<u8>) -> Result<Vec<BoundingBox>> {
        Ok(vec![BoundingBox::new(
            100.0,
            50.0,
            200.0,
            400.0,
            "person".to_string(),
            0.92,
        )])
    }

    fn name(&self) -> &str {
        "person-only"
    }
}

struct Fixture {
    ready: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
    loads: Arc<AtomicUsize>,
}

impl Fixture {
    fn new(ready: bool) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(ready)),
            reads: Arc::new(AtomicUsize::new(0)),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn camera(&self) -> StillCamera {
        StillCamera {
            ready: Arc::clone(&self.ready),
            reads: Arc::clone(&self.reads),
        }
    }

    fn loader(&self, fail: bool) -> DetectorLoader<Vec<u8>> {
        let loads = Arc::clone(&self.loads);
        Box::new(move || {
            loads.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(PipelineError::DetectorLoad("model file not found".to_string()))
            } else {
                Ok(Box::new(PersonDetector) as Box<dyn Detector<Vec<u8>>>)
            }
        })
    }

    fn detection_loop(&self, fail_load: bool) -> DetectionLoop<StillCamera> {
        DetectionLoop::new(
            shared(self.camera()),
            self.loader(fail_load),
            TICK,
            Scheduler::new(Logger::disabled()),
            Logger::disabled(),
        )
    }
}

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn test_start_twice_loads_once() {
    let fixture = Fixture::new(true);
    let mut detection = fixture.detection_loop(false);

    detection.start().unwrap();
    detection.start().unwrap();

    assert!(wait_until(|| detection.state() == LoopState::Polling));
    detection.start().unwrap();
    thread::sleep(TICK * 4);

    assert_eq!(fixture.loads.load(Ordering::SeqCst), 1);
    assert_eq!(detection.state(), LoopState::Polling);
}

#[test]
fn test_load_failure_leaves_loop_inert() {
    let fixture = Fixture::new(true);
    let mut detection = fixture.detection_loop(true);

    detection.start().unwrap();
    assert!(wait_until(|| detection.last_error().is_some()));
    thread::sleep(TICK * 4);

    assert_eq!(detection.state(), LoopState::Loading);
    assert!(matches!(
        detection.last_error(),
        Some(PipelineError::DetectorLoad(_))
    ));
    assert_eq!(detection.results().version(), 0);
    assert_eq!(fixture.reads.load(Ordering::SeqCst), 0);
    assert_eq!(fixture.loads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unready_source_publishes_nothing() {
    let fixture = Fixture::new(false);
    let mut detection = fixture.detection_loop(false);

    detection.start().unwrap();
    assert!(wait_until(|| detection.state() == LoopState::Polling));
    thread::sleep(TICK * 6);

    assert_eq!(detection.results().version(), 0);
    assert_eq!(fixture.reads.load(Ordering::SeqCst), 0);

    fixture.ready.store(true, Ordering::SeqCst);
    let results = detection.results();
    assert!(wait_until(|| results.version() > 0));
}

#[test]
fn test_results_carry_frame_dimensions() {
    let fixture = Fixture::new(true);
    let mut detection = fixture.detection_loop(false);

    detection.start().unwrap();
    let results = detection.results();
    assert!(wait_until(|| results.version() > 0));

    let latest = results.snapshot().value;
    assert_eq!(latest.frame_width, 1280);
    assert_eq!(latest.frame_height, 720);
    assert_eq!(latest.boxes.len(), 1);
    assert_eq!(latest.boxes[0].label, "person");
}

#[test]
fn test_drop_stops_polling() {
    let fixture = Fixture::new(true);
    let mut detection = fixture.detection_loop(false);
    detection.start().unwrap();
    let results = detection.results();
    assert!(wait_until(|| results.version() > 0));

    drop(detection);
    let reads = fixture.reads.load(Ordering::SeqCst);
    thread::sleep(TICK * 6);

    assert_eq!(fixture.reads.load(Ordering::SeqCst), reads);
}

#[test]
fn test_stop_moves_to_stopped() {
    let fixture = Fixture::new(true);
    let mut detection = fixture.detection_loop(false);

    detection.start().unwrap();
    detection.stop();

    assert_eq!(detection.state(), LoopState::Stopped);
    detection.start().unwrap();
    assert_eq!(detection.state(), LoopState::Stopped);
}
