//! Lightweight wall-clock timing for construction runs.
//!
//! The CLI and the limit-testing harness time each construction; reports
//! carry the measured seconds next to the theoretical complexity estimate.

use std::time::{Duration, Instant};

/// A simple timer that measures elapsed time.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Time elapsed so far, without stopping.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return elapsed time in seconds.
    pub fn stop(self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer and emit the result as a debug event.
    pub fn stop_and_log(self) -> f64 {
        let label = self.label;
        let elapsed = self.stop();
        tracing::debug!(timer = label, elapsed_s = elapsed, "timer stopped");
        elapsed
    }
}

/// Accumulated timings of a sequence of runs (used by the limits harness).
#[derive(Debug, Default, Clone)]
pub struct TimingStats {
    total_s: f64,
    max_s: f64,
    count: u64,
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timing measurement.
    pub fn record(&mut self, duration_s: f64) {
        self.total_s += duration_s;
        self.max_s = self.max_s.max(duration_s);
        self.count += 1;
    }

    /// Total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_s
    }

    /// Slowest single measurement (in seconds).
    pub fn max_seconds(&self) -> f64 {
        self.max_s
    }

    /// Number of recorded measurements.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Average time per measurement (in seconds).
    pub fn average_seconds(&self) -> f64 {
        if self.count > 0 {
            self.total_s / self.count as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_reports_non_negative_time() {
        let timer = Timer::start("test");
        assert_eq!(timer.label(), "test");
        assert!(timer.stop() >= 0.0);
    }

    #[test]
    fn stats_accumulate() {
        let mut stats = TimingStats::new();
        assert_eq!(stats.average_seconds(), 0.0);
        stats.record(1.0);
        stats.record(3.0);
        assert_eq!(stats.count(), 2);
        assert_eq!(stats.total_seconds(), 4.0);
        assert_eq!(stats.max_seconds(), 3.0);
        assert_eq!(stats.average_seconds(), 2.0);
    }
}
