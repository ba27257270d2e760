//! Detector pipeline driving panel detection end-to-end.
//!
//! The [`PanelDetector`] exposes a simple API: feed a decoded page and get the
//! panel boxes in reading order, optionally with a diagnostics report.
//!
//! Typical usage:
//! ```no_run
//! use panel_detector::{PanelDetector, PanelParams};
//! use panel_detector::image::io::load_rgba_image;
//! use std::path::Path;
//!
//! # fn main() -> panel_detector::Result<()> {
//! let page = load_rgba_image(Path::new("page.png"))?;
//! let mut detector = PanelDetector::new(PanelParams::default());
//! let report = detector.process_with_diagnostics(&page.as_view())?;
//! for (i, panel) in report.panels.iter().enumerate() {
//!     println!("panel {}: {:?}", i + 1, panel);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::PanelParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    DetectionReport, InputDescriptor, PipelineTrace, SegmentationStage, TimingBreakdown,
};
use crate::error::Result;
use crate::image::ImageView;
use crate::segments::{self, SegmentWorkspace};
use crate::types::BoundingBox;
use log::debug;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

/// Panel detector holding its parameters and a reusable segmentation
/// workspace. Calls take `&mut self`; use one detector per thread.
pub struct PanelDetector {
    params: PanelParams,
    workspace: SegmentWorkspace,
}

impl PanelDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: PanelParams) -> Self {
        Self {
            params,
            workspace: SegmentWorkspace::new(),
        }
    }

    pub fn params(&self) -> &PanelParams {
        &self.params
    }

    /// Run the detector on a page, returning the panels in reading order.
    pub fn process<I: ImageView>(&mut self, image: &I) -> Result<Vec<BoundingBox>> {
        Ok(self.process_with_diagnostics(image)?.panels)
    }

    /// Run the detector and return both the panels and a detailed report.
    pub fn process_with_diagnostics<I: ImageView>(&mut self, image: &I) -> Result<DetectionReport> {
        self.run(image, None)
    }

    /// Like [`process_with_diagnostics`](Self::process_with_diagnostics) but
    /// aborts with `PanelError::Cancelled` once `cancel` is observed set.
    pub fn process_cancellable<I: ImageView>(
        &mut self,
        image: &I,
        cancel: &AtomicBool,
    ) -> Result<DetectionReport> {
        self.run(image, Some(cancel))
    }

    fn run<I: ImageView>(&mut self, image: &I, cancel: Option<&AtomicBool>) -> Result<DetectionReport> {
        let (width, height) = (image.width(), image.height());
        debug!(
            "PanelDetector::process start w={} h={} threshold={}",
            width, height, self.params.gutter_brightness_threshold
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let seg_start = Instant::now();
        let classifier = self.params.classifier();
        let components = match cancel {
            Some(flag) => segments::extract_components_cancellable(
                image,
                classifier,
                &mut self.workspace,
                flag,
                self.params.cancel_check_rows,
            )?,
            None => segments::extract_components_with(image, classifier, &mut self.workspace)?,
        };
        let seg_ms = timings.record("segmentation", seg_start);
        debug!(
            "PanelDetector::process components={} elapsed_ms={:.3}",
            components.len(),
            seg_ms
        );

        let filter_start = Instant::now();
        let outcome = self.params.noise_filter().apply(&components, width, height);
        timings.record("noiseFilter", filter_start);
        debug!(
            "PanelDetector::process kept={} discarded={} min_area_fraction={}",
            outcome.boxes.len(),
            outcome.discarded,
            self.params.min_panel_area_fraction
        );

        let sort_start = Instant::now();
        let mut panels = outcome.boxes;
        self.params.reading_order().sort(&mut panels);
        timings.record("readingOrder", sort_start);

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "PanelDetector::process done panels={} total_ms={:.3}",
            panels.len(),
            timings.total_ms
        );

        let segmentation = SegmentationStage::from_components(&components, outcome.discarded);
        Ok(DetectionReport {
            panels,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width,
                    height,
                    channels: I::CHANNELS,
                },
                timings,
                segmentation,
            },
        })
    }
}

/// One-shot detection with a freshly allocated workspace.
pub fn detect_panels<I: ImageView>(image: &I, params: &PanelParams) -> Result<Vec<BoundingBox>> {
    PanelDetector::new(params.clone()).process(image)
}
