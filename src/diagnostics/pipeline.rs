use crate::diagnostics::{SegmentationStage, TimingBreakdown};
use crate::types::BoundingBox;
use serde::Serialize;

/// Shown to the user when a page yields no panels. An empty result is a
/// valid outcome, not an error.
pub const NO_PANELS_HINT: &str = "No frames were detected. This method works best with comics that have clear, bright gutters between panels.";

/// Result produced by [`PanelDetector::process_with_diagnostics`](crate::PanelDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Panels in reading order.
    pub panels: Vec<BoundingBox>,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub segmentation: SegmentationStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}
