#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod crop;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Pipeline stages, public for tools and tests that drive them directly.
pub mod filter;
pub mod gutter;
pub mod order;
pub mod segments;

// JSON configs for the command-line tools.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_panels, PanelDetector, PanelParams};
pub use crate::error::{PanelError, Result};
pub use crate::types::{BoundingBox, PixelRect};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use panel_detector::prelude::*;
///
/// # fn main() -> panel_detector::Result<()> {
/// let (w, h) = (64usize, 32usize);
/// let mut rgba = [255u8; 4].repeat(w * h);
/// for y in 4..28 {
///     for x in 4..28 {
///         let i = (y * w + x) * 4;
///         rgba[i..i + 3].copy_from_slice(&[0, 0, 0]);
///     }
/// }
/// let img = ImageRgba8::packed(w, h, &rgba)?;
///
/// let mut det = PanelDetector::new(PanelParams::default());
/// let panels = det.process(&img)?;
/// assert_eq!(panels.len(), 1);
/// println!("first panel starts at x={:.3}", panels[0].x);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, ImageRgba8, ImageView};
    pub use crate::{BoundingBox, PanelDetector, PanelParams};
}
