//! Shared run statistics.
//!
//! One lock-guarded counter record mutated by every worker. The critical
//! section is limited to the O(1) increment; the lock is never held across a
//! probe or an ffmpeg invocation. The final snapshot is taken only after the
//! pool has joined, so it observes every increment.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::analysis::Action;

/// Outcome of processing one file, consumed immediately into [`Stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobResult {
    /// Conversion (or rewrap) completed; carries the action that ran.
    Succeeded(Action),
    /// Already compatible with the target; nothing was done.
    Skipped,
    /// Terminal per-file failure with a user-visible reason.
    Failed(String),
}

#[derive(Debug, Default)]
struct Counters {
    succeeded: usize,
    rewrapped: usize,
    skipped: usize,
    failed: usize,
}

/// Aggregate counters for one run.
///
/// Rewraps are accounted in their own bucket, disjoint from `succeeded`, so
/// `succeeded + rewrapped + skipped + failed == total` holds once the pool
/// has drained.
pub struct Stats {
    total: usize,
    counters: Mutex<Counters>,
    started: Instant,
}

impl Stats {
    /// Creates the record with `total` pre-set to the file count.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            counters: Mutex::new(Counters::default()),
            started: Instant::now(),
        }
    }

    /// Records one resolved job. Called exactly once per file by the worker
    /// that processed it.
    pub fn record(&self, result: &JobResult) {
        let mut counters = self.counters.lock().unwrap();
        match result {
            JobResult::Succeeded(Action::Rewrap) => counters.rewrapped += 1,
            JobResult::Succeeded(_) => counters.succeeded += 1,
            JobResult::Skipped => counters.skipped += 1,
            JobResult::Failed(_) => counters.failed += 1,
        }
    }

    /// Takes a consistent snapshot. Only meaningful after all workers joined.
    pub fn snapshot(&self) -> StatsSnapshot {
        let counters = self.counters.lock().unwrap();
        StatsSnapshot {
            total: self.total,
            succeeded: counters.succeeded,
            rewrapped: counters.rewrapped,
            skipped: counters.skipped,
            failed: counters.failed,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Immutable view of the final statistics, suitable for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: usize,
    pub succeeded: usize,
    pub rewrapped: usize,
    pub skipped: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl StatsSnapshot {
    /// True when every queued file has been accounted for exactly once.
    pub fn is_balanced(&self) -> bool {
        self.succeeded + self.rewrapped + self.skipped + self.failed == self.total
    }
}
