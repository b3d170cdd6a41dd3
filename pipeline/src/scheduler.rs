//! Named repeating background tasks with explicit cancellation.

use crate::error::{PipelineError, Result};
use logging::Logger;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest uninterrupted sleep, so cancellation is noticed quickly.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// What a tick asks the scheduler to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Spawns repeating tasks on dedicated threads.
#[derive(Clone)]
pub struct Scheduler {
    logger: Logger,
}

impl Scheduler {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Runs `tick` every `interval` until it returns [`TickControl::Stop`]
    /// or the returned handle is cancelled.
    ///
    /// Tick duration is subtracted from the following sleep, so the cadence
    /// holds as long as a tick is shorter than the interval.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Scheduler`] if the thread cannot be spawned.
    pub fn spawn_repeating<F>(&self, name: &str, interval: Duration, mut tick: F) -> Result<TaskHandle>
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let logger = self.logger.clone();
        let task_name = name.to_string();

        let handle = thread::Builder::new()
            .name(task_name.clone())
            .spawn(move || {
                logger.debug(&format!("Task '{}' started", task_name));
                let mut ticks: u64 = 0;

                while !flag.load(Ordering::Acquire) {
                    let tick_start = Instant::now();
                    ticks += 1;

                    if tick() == TickControl::Stop {
                        break;
                    }

                    let elapsed = tick_start.elapsed();
                    if elapsed < interval {
                        sleep_unless_cancelled(interval - elapsed, &flag);
                    } else {
                        thread::yield_now();
                    }
                }

                logger.debug(&format!("Task '{}' ended after {} ticks", task_name, ticks));
            })
            .map_err(|e| spawn_error(name, &e))?;

        Ok(TaskHandle {
            name: name.to_string(),
            cancelled,
            handle: Some(handle),
        })
    }
}

fn sleep_unless_cancelled(total: Duration, flag: &AtomicBool) {
    let deadline = Instant::now() + total;
    loop {
        if flag.load(Ordering::Acquire) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

/// Owner of a running task. Dropping the handle stops the task.
pub struct TaskHandle {
    name: String,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks the task to stop after its current tick.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Whether the task thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancels and waits for the thread to exit.
    pub fn stop(&mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            // A tick that panicked has already ended the task.
            let _ = handle.join();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Thread spawn failures are the only I/O errors the scheduler reports.
fn spawn_error(name: &str, err: &std::io::Error) -> PipelineError {
    PipelineError::Scheduler(format!("failed to spawn '{}': {}", name, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn scheduler() -> Scheduler {
        Scheduler::new(Logger::disabled())
    }

    #[test]
    fn test_spawn_error_names_task() {
        let err = spawn_error("preview", &std::io::Error::other("no threads left"));
        assert_eq!(
            err,
            PipelineError::Scheduler("failed to spawn 'preview': no threads left".to_string())
        );
    }

    #[test]
    fn test_runs_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut handle = scheduler()
            .spawn_repeating("counter", Duration::from_millis(5), move || {
                counter.fetch_add(1, Ordering::SeqCst);
                TickControl::Continue
            })
            .unwrap();

        thread::sleep(Duration::from_millis(60));
        handle.stop();
        let after_stop = count.load(Ordering::SeqCst);

        assert!(after_stop >= 2);
        assert!(handle.is_finished());
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_tick_can_stop_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let handle = scheduler()
            .spawn_repeating("three", Duration::from_millis(1), move || {
                if counter.fetch_add(1, Ordering::SeqCst) == 2 {
                    TickControl::Stop
                } else {
                    TickControl::Continue
                }
            })
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        assert!(handle.is_finished());
        assert!(!handle.is_cancelled());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_long_interval_cancels_promptly() {
        let mut handle = scheduler()
            .spawn_repeating("slow", Duration::from_secs(30), || TickControl::Continue)
            .unwrap();
        assert_eq!(handle.name(), "slow");

        thread::sleep(Duration::from_millis(20));
        let start = Instant::now();
        handle.stop();

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
