use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock time spent in one detector stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings plus the total for one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Record a stage that started at `start` and ends now. Returns the
    /// elapsed milliseconds.
    pub fn record(&mut self, label: impl Into<String>, start: Instant) -> f64 {
        let elapsed_ms = elapsed_ms(start);
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
        elapsed_ms
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
