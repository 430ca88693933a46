//! Inference statistics - call count and latency

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lock-free counters shared by every predict call on one model
#[derive(Debug, Default)]
pub struct InferenceStats {
    latency_sum_us: AtomicU64,
    count: AtomicU64,
    failures: AtomicU64,
}

/// Point-in-time copy for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Successful model calls, chart sweep points included
    pub inference_count: u64,
    pub failure_count: u64,
    pub avg_latency_ms: f32,
}

impl InferenceStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, elapsed: Duration) {
        self.latency_sum_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        StatsSnapshot {
            inference_count: count,
            failure_count: self.failures.load(Ordering::Relaxed),
            avg_latency_ms: avg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let stats = InferenceStats::new();
        let snap = stats.snapshot();
        assert_eq!(snap.inference_count, 0);
        assert_eq!(snap.avg_latency_ms, 0.0);
    }

    #[test]
    fn test_average_latency() {
        let stats = InferenceStats::new();
        stats.record(Duration::from_millis(2));
        stats.record(Duration::from_millis(4));
        stats.record_failure();

        let snap = stats.snapshot();
        assert_eq!(snap.inference_count, 2);
        assert_eq!(snap.failure_count, 1);
        assert!((snap.avg_latency_ms - 3.0).abs() < 1e-3);
    }
}
