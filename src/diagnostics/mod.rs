//! Diagnostics data model exposed by the detector and the demo binary.
//!
//! `DetectionReport` is the main entry point returned by the detector,
//! bundling the ordered panels with a `PipelineTrace` describing the input,
//! per-stage timings and segmentation statistics.

pub mod pipeline;
pub mod segments;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace, NO_PANELS_HINT};
pub use segments::SegmentationStage;
pub use timing::{StageTiming, TimingBreakdown};
