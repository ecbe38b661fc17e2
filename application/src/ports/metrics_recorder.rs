//! Metrics recorder port
//!
//! Completed runs hand a flat [`RunMetrics`] record to a recorder; the
//! experiment summary is computed from those records.

use canvass_domain::RunMetrics;
use std::sync::Mutex;

/// Sink for per-run metric records
pub trait MetricsRecorder: Send + Sync {
    fn record(&self, metrics: RunMetrics);

    /// All records so far, in insertion order
    fn records(&self) -> Vec<RunMetrics>;
}

/// Recorder that keeps every record in memory
#[derive(Default)]
pub struct InMemoryMetricsRecorder {
    records: Mutex<Vec<RunMetrics>>,
}

impl InMemoryMetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsRecorder for InMemoryMetricsRecorder {
    fn record(&self, metrics: RunMetrics) {
        if let Ok(mut records) = self.records.lock() {
            records.push(metrics);
        }
    }

    fn records(&self) -> Vec<RunMetrics> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_recorder_keeps_order() {
        let recorder = InMemoryMetricsRecorder::new();
        for i in 0..3usize {
            let mut metrics = RunMetrics::new();
            metrics.insert("i", i);
            recorder.record(metrics);
        }
        let records = recorder.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].number("i"), Some(2.0));
    }
}
