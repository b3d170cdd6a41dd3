//! User-triggered capture cycles.

use crate::capture::{CaptureBuffer, CaptureSession};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::ordering::DisplayOrderer;
use crate::partition::{CategorySet, Partitioner, SliceSizer};
use crate::source::{FrameSource, SharedSource};
use crate::state_cell::StateCell;
use logging::Logger;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// History entry for one captured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRecord {
    /// Cycle that captured the frame, starting at 1.
    pub session: u64,
    pub title: String,
    pub author: String,
    pub timestamp: i64,
}

/// Outcome of one capture cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSummary {
    pub session: u64,
    pub frames: usize,
    pub categories: usize,
    pub timed_out: bool,
    /// Stopped on the time limit short of capacity.
    pub partial: bool,
    pub elapsed: Duration,
    /// Version of the category set published by this cycle.
    pub version: u64,
}

/// Runs capture, partition and ordering, then publishes the ordered set.
///
/// One cycle runs at a time. The category cell receives exactly one publish
/// per completed cycle, so renderers never see an unordered set.
pub struct CaptureController<S: FrameSource, Z: SliceSizer> {
    session: CaptureSession<S>,
    partitioner: Mutex<Partitioner<Z>>,
    orderer: DisplayOrderer,
    categories: StateCell<CategorySet<S::Image>>,
    history: Mutex<VecDeque<CaptureRecord>>,
    history_limit: usize,
    sessions: AtomicU64,
    busy: AtomicBool,
    logger: Logger,
}

impl<S: FrameSource, Z: SliceSizer> CaptureController<S, Z> {
    pub fn new(
        source: SharedSource<S>,
        partitioner: Partitioner<Z>,
        config: &PipelineConfig,
        logger: Logger,
    ) -> Self {
        Self {
            session: CaptureSession::new(source, config.capture, logger.clone()),
            partitioner: Mutex::new(partitioner),
            orderer: DisplayOrderer,
            categories: StateCell::default(),
            history: Mutex::new(VecDeque::new()),
            history_limit: config.history_limit,
            sessions: AtomicU64::new(0),
            busy: AtomicBool::new(false),
            logger,
        }
    }

    /// Runs one full cycle and publishes its categories.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::CaptureInProgress`] if another cycle is
    /// running. Partial captures are not errors.
    pub fn capture(&self) -> Result<CaptureSummary> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or_else(|| {
            self.logger
                .warn("Capture requested while another capture is running");
            PipelineError::CaptureInProgress
        })?;

        let session = self.sessions.fetch_add(1, Ordering::SeqCst) + 1;
        self.logger.info(&format!("Capture #{} started", session));

        let buffer = self.session.run();
        let frames = buffer.len();
        let timed_out = buffer.timed_out();
        let partial = buffer.is_partial();
        let elapsed = buffer.elapsed();

        self.record_history(session, &buffer);

        let categories = {
            let mut partitioner = self
                .partitioner
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            partitioner.partition(buffer)
        };
        let ordered = self.orderer.order(categories);
        let category_count = ordered.len();
        let version = self.categories.publish(Arc::new(ordered));

        self.logger.info(&format!(
            "Capture #{} done: {} frames in {} categories",
            session, frames, category_count
        ));

        Ok(CaptureSummary {
            session,
            frames,
            categories: category_count,
            timed_out,
            partial,
            elapsed,
            version,
        })
    }

    /// Whether a cycle is running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Cell holding the ordered category set of the latest cycle.
    pub fn categories(&self) -> StateCell<CategorySet<S::Image>> {
        self.categories.clone()
    }

    /// History records, oldest first.
    pub fn history(&self) -> Vec<CaptureRecord> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Capacity of each capture buffer.
    pub fn capacity(&self) -> usize {
        self.session.limits().max_frames
    }

    fn record_history(&self, session: u64, buffer: &CaptureBuffer<S::Image>) {
        if self.history_limit == 0 {
            return;
        }
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        for frame in buffer {
            if history.len() == self.history_limit {
                history.pop_front();
            }
            history.push_back(CaptureRecord {
                session,
                title: frame.title().to_string(),
                author: frame.author().to_string(),
                timestamp: frame.timestamp(),
            });
        }
    }
}

/// Holds the busy flag for the lifetime of a cycle.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
