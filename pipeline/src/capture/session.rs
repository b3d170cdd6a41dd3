//! The timed capture loop.

use super::buffer::{CaptureBuffer, MAX_CAPTURE_FRAMES};
use super::frame::CapturedFrame;
use crate::source::{self, FrameSource, SharedSource};
use logging::Logger;
use std::thread;
use std::time::{Duration, Instant};

/// Default number of frames per session.
pub const DEFAULT_MAX_FRAMES: usize = MAX_CAPTURE_FRAMES;

/// Default soft time limit for a session.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Bounds for one capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureLimits {
    /// Buffer capacity; the session stops once this many frames are held.
    /// Never more than [`MAX_CAPTURE_FRAMES`].
    pub max_frames: usize,
    /// Soft bound, checked after each attempt.
    pub time_limit: Duration,
    /// Pause between pulls. Zero only yields.
    pub pull_interval: Duration,
    /// Pause after an attempt skipped because the source was not ready.
    pub not_ready_backoff: Duration,
}

impl Default for CaptureLimits {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            time_limit: DEFAULT_TIME_LIMIT,
            pull_interval: Duration::ZERO,
            not_ready_backoff: Duration::from_millis(20),
        }
    }
}

/// Pulls a bounded burst of frames from a shared source.
///
/// The session never cancels a read in flight: the time limit is checked
/// after each attempt, so a session may overrun it by one read.
pub struct CaptureSession<S: FrameSource> {
    source: SharedSource<S>,
    limits: CaptureLimits,
    logger: Logger,
}

impl<S: FrameSource> CaptureSession<S> {
    /// `max_frames` above [`MAX_CAPTURE_FRAMES`] is clamped to it.
    pub fn new(source: SharedSource<S>, mut limits: CaptureLimits, logger: Logger) -> Self {
        if limits.max_frames > MAX_CAPTURE_FRAMES {
            logger.warn(&format!(
                "max_frames {} above the {} frame ceiling, clamping",
                limits.max_frames, MAX_CAPTURE_FRAMES
            ));
            limits.max_frames = MAX_CAPTURE_FRAMES;
        }
        Self {
            source,
            limits,
            logger,
        }
    }

    pub fn limits(&self) -> &CaptureLimits {
        &self.limits
    }

    /// Runs one session to completion.
    ///
    /// Returns a full buffer, or a partial one when the time limit passed
    /// first. Not-ready sources and read errors only cost an attempt.
    pub fn run(&self) -> CaptureBuffer<S::Image> {
        let mut buffer = CaptureBuffer::with_capacity(self.limits.max_frames);
        let start = Instant::now();
        let mut timed_out = false;
        let mut skipped = 0usize;

        self.logger.info(&format!(
            "Capture session started (max {} frames, limit {} ms)",
            self.limits.max_frames,
            self.limits.time_limit.as_millis()
        ));

        while !buffer.is_full() {
            let pulled = self.pull_one(&mut buffer);
            if !pulled {
                skipped += 1;
            }

            if buffer.is_full() {
                break;
            }

            if start.elapsed() >= self.limits.time_limit {
                timed_out = true;
                break;
            }

            if !pulled && !self.limits.not_ready_backoff.is_zero() {
                thread::sleep(self.limits.not_ready_backoff);
            } else if self.limits.pull_interval.is_zero() {
                thread::yield_now();
            } else {
                thread::sleep(self.limits.pull_interval);
            }
        }

        let elapsed = start.elapsed();
        buffer.finish(timed_out, elapsed);

        if buffer.is_partial() {
            self.logger.warn(&format!(
                "Capture time limit reached after {} ms: kept {}/{} frames ({} attempts skipped)",
                elapsed.as_millis(),
                buffer.len(),
                buffer.capacity(),
                skipped
            ));
        } else {
            self.logger.info(&format!(
                "Capture session finished: {} frames in {} ms",
                buffer.len(),
                elapsed.as_millis()
            ));
        }

        buffer
    }

    /// One attempt. Holds the source lock for a single read.
    fn pull_one(&self, buffer: &mut CaptureBuffer<S::Image>) -> bool {
        let result = {
            let mut source = source::lock(&self.source);
            if !source.is_ready() {
                self.logger.debug("Source not ready, skipping attempt");
                return false;
            }
            source.capture_frame()
        };

        match result {
            Ok(image) => {
                let timestamp = chrono::Utc::now().timestamp_millis();
                buffer.push(CapturedFrame::new(image, timestamp))
            }
            Err(e) => {
                self.logger.warn(&format!("Frame read failed: {}", e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::shared;
    use crate::test_support::CountingSource;

    fn limits(max_frames: usize, time_limit_ms: u64) -> CaptureLimits {
        CaptureLimits {
            max_frames,
            time_limit: Duration::from_millis(time_limit_ms),
            pull_interval: Duration::ZERO,
            not_ready_backoff: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_fast_source_fills_buffer() {
        let session = CaptureSession::new(
            shared(CountingSource::new()),
            CaptureLimits::default(),
            Logger::disabled(),
        );

        let buffer = session.run();

        assert_eq!(buffer.len(), DEFAULT_MAX_FRAMES);
        assert!(!buffer.timed_out());
        let ids: Vec<u32> = buffer.iter().map(|f| *f.image()).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_slow_source_stops_on_time_limit() {
        let source = CountingSource::new().with_delay(Duration::from_millis(30));
        let session = CaptureSession::new(shared(source), limits(25, 100), Logger::disabled());

        let buffer = session.run();

        assert!(buffer.timed_out());
        assert!(buffer.is_partial());
        assert!(buffer.len() >= 1);
        assert!(buffer.len() < 25);
    }

    #[test]
    fn test_not_ready_source_yields_empty_partial_buffer() {
        let session = CaptureSession::new(
            shared(CountingSource::not_ready()),
            limits(25, 50),
            Logger::disabled(),
        );

        let buffer = session.run();

        assert!(buffer.is_empty());
        assert!(buffer.timed_out());
    }

    #[test]
    fn test_read_errors_are_skipped() {
        let source = shared(CountingSource::new().failing_on(&[2, 4]));
        let session = CaptureSession::new(source.clone(), limits(5, 5_000), Logger::disabled());

        let buffer = session.run();

        assert_eq!(buffer.len(), 5);
        assert_eq!(source::lock(&source).attempts(), 7);
    }

    #[test]
    fn test_frames_carry_placeholder_metadata() {
        let session = CaptureSession::new(
            shared(CountingSource::new()),
            limits(3, 1_000),
            Logger::disabled(),
        );

        let buffer = session.run();

        for frame in &buffer {
            assert!(frame.timestamp() > 0);
            assert_eq!(frame.title(), format!("Capture - {}", frame.timestamp()));
            assert_eq!(frame.author(), super::super::frame::PLACEHOLDER_AUTHOR);
        }
    }
}
