//! Advisory progress reporting for long runs.
//!
//! The engine counts every mutation it applies. Each time the running total
//! crosses a multiple of the configured interval, the observer receives a
//! [`ProgressReport`]. Reports never influence trial outcomes.

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicU64, Ordering};

/// Timestamp layout used in progress lines, e.g. `2024.03.01 12:30:05`.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    /// The interval multiple that was crossed
    pub mutations: u64,
    pub timestamp: DateTime<Local>,
}

impl ProgressReport {
    /// Mutations completed, in whole millions.
    pub fn millions(&self) -> u64 {
        self.mutations / 1_000_000
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Receiver of progress events. May be called from any worker thread.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, report: &ProgressReport);

    /// Called after each batch of trials finishes.
    fn on_trials_completed(&self, _trials: u64) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _report: &ProgressReport) {}
}

/// Forwards progress to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&self, report: &ProgressReport) {
        log::info!(
            "Generations completed: {} million, {}",
            report.millions(),
            report.formatted_timestamp()
        );
    }
}

/// Shared mutation counter that turns interval crossings into reports.
#[derive(Debug)]
pub struct ProgressMonitor {
    interval: u64,
    mutations: AtomicU64,
}

impl ProgressMonitor {
    /// `interval == 0` counts mutations but never reports.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            mutations: AtomicU64::new(0),
        }
    }

    pub fn mutations(&self) -> u64 {
        self.mutations.load(Ordering::Relaxed)
    }

    /// Add `mutations` to the counter and report every interval multiple the
    /// addition crosses, in increasing order.
    pub fn record(&self, mutations: u64, observer: &dyn ProgressObserver) {
        let before = self.mutations.fetch_add(mutations, Ordering::Relaxed);
        if self.interval == 0 {
            return;
        }
        let after = before + mutations;
        for multiple in (before / self.interval + 1)..=(after / self.interval) {
            observer.on_progress(&ProgressReport {
                mutations: multiple * self.interval,
                timestamp: Local::now(),
            });
        }
    }
}
