//! Search control — stop flag and optional time limit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Checked periodically by the search to decide whether to abort. The stop
/// flag can be raised from another thread through a shared reference; the
/// clock, when present, is checked every 1024 nodes.
pub struct SearchControl {
    stopped: AtomicBool,
    deadline: Option<Instant>,
}

impl SearchControl {
    /// Control with no time limit; only responds to [`stop`](Self::stop).
    pub fn infinite() -> Self {
        Self {
            stopped: AtomicBool::new(false),
            deadline: None,
        }
    }

    /// Control that stops once `limit` has elapsed; the clock starts now.
    pub fn timed(limit: Duration) -> Self {
        Self {
            stopped: AtomicBool::new(false),
            deadline: Some(Instant::now() + limit),
        }
    }

    /// Raise the stop flag. The search aborts at its next check.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Check whether the search should abort.
    ///
    /// The stop flag is checked on every call; the deadline only every
    /// 1024 nodes. Once the deadline fires the flag is set so later calls
    /// return immediately.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Acquire) {
            return true;
        }

        if nodes & 1023 != 0 {
            return false;
        }

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }
}
