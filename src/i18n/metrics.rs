//! Language-switch metrics.
//!
//! Counters for how translation loads end: applied, failed, or discarded
//! because a newer switch was issued while they were in flight. Each engine
//! owns its own counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LoadMetrics {
    /// Number of loads issued (initial detection and explicit switches)
    loads_started: AtomicUsize,

    /// Number of loads whose document was swapped in and rendered
    loads_applied: AtomicUsize,

    /// Number of loads that failed to fetch or parse
    loads_failed: AtomicUsize,

    /// Number of completed loads dropped because a newer one was issued
    stale_discarded: AtomicUsize,
}

impl LoadMetrics {
    pub fn record_started(&self) {
        self.loads_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_applied(&self) {
        self.loads_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.loads_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn loads_started(&self) -> usize {
        self.loads_started.load(Ordering::Relaxed)
    }

    pub fn loads_applied(&self) -> usize {
        self.loads_applied.load(Ordering::Relaxed)
    }

    pub fn loads_failed(&self) -> usize {
        self.loads_failed.load(Ordering::Relaxed)
    }

    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let started = self.loads_started();
        let failed = self.loads_failed();
        let failure_rate = if started > 0 {
            (failed as f64 / started as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            loads_started: started,
            loads_applied: self.loads_applied(),
            loads_failed: failed,
            stale_discarded: self.stale_discarded(),
            failure_rate,
        }
    }
}

/// Snapshot of load counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub loads_started: usize,
    pub loads_applied: usize,
    pub loads_failed: usize,
    pub stale_discarded: usize,

    /// Failed loads as a percentage of started loads (0-100)
    pub failure_rate: f64,
}
