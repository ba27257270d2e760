//! Connected-component extraction over the gutter/ink classification.
//!
//! The extractor walks the page in row-major order. Every pixel is marked in
//! a flat visited mask the first time it is touched; gutter pixels end there.
//! An unvisited ink pixel seeds a breadth-first flood fill over its 4-connected
//! ink neighbours (up, down, left, right) using a FIFO of row-major indices.
//! Neighbours are marked visited before they are enqueued, so each pixel enters
//! the frontier at most once and the whole scan is O(W*H) regardless of how
//! many components the page contains.
//!
//! Each finished region is reduced to its inclusive bounding rectangle and
//! ink pixel count. Components are returned in the order their seeds are met
//! by the scan; filtering and reading order are applied downstream.

mod extractor;
mod region_accumulator;
mod workspace;

pub use region_accumulator::Component;
pub use workspace::SegmentWorkspace;

use crate::error::Result;
use crate::gutter::GutterClassifier;
use crate::image::{ensure_readable, ImageView};
use std::sync::atomic::AtomicBool;

/// Extract all ink components using a freshly allocated workspace.
pub fn extract_components<I: ImageView>(
    image: &I,
    classifier: GutterClassifier,
) -> Result<Vec<Component>> {
    let mut workspace = SegmentWorkspace::new();
    extract_components_with(image, classifier, &mut workspace)
}

/// Extract all ink components, reusing the buffers held by `workspace`.
///
/// Fails with `PanelError::SurfaceAcquisition` when the view's geometry does
/// not fit its buffer.
pub fn extract_components_with<I: ImageView>(
    image: &I,
    classifier: GutterClassifier,
    workspace: &mut SegmentWorkspace,
) -> Result<Vec<Component>> {
    ensure_readable(image)?;
    Ok(extractor::ComponentExtractor::new(image, classifier, workspace).extract())
}

/// Cancellable extraction. `cancel` is polled at row boundaries every
/// `check_rows` rows; once set, the call fails with `PanelError::Cancelled`.
pub fn extract_components_cancellable<I: ImageView>(
    image: &I,
    classifier: GutterClassifier,
    workspace: &mut SegmentWorkspace,
    cancel: &AtomicBool,
    check_rows: usize,
) -> Result<Vec<Component>> {
    ensure_readable(image)?;
    extractor::ComponentExtractor::new(image, classifier, workspace)
        .extract_cancellable(cancel, check_rows)
}
