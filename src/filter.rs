//! Area-based noise rejection and conversion to fractional boxes.
//!
//! Scanning dust, halftone specks and compression artefacts produce small
//! ink components. A component survives only when its bounding rectangle
//! covers strictly more than `min_area_fraction` of the page.

use crate::segments::Component;
use crate::types::{BoundingBox, PixelRect};

/// Default minimum panel area as a fraction of the page (1%).
pub const DEFAULT_MIN_AREA_FRACTION: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseFilter {
    pub min_area_fraction: f64,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            min_area_fraction: DEFAULT_MIN_AREA_FRACTION,
        }
    }
}

/// Outcome of filtering one page's components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOutcome {
    /// Surviving boxes in component order.
    pub boxes: Vec<BoundingBox>,
    pub discarded: usize,
}

impl NoiseFilter {
    pub fn new(min_area_fraction: f64) -> Self {
        Self { min_area_fraction }
    }

    /// Fraction of the page covered by `rect`.
    pub fn area_fraction(rect: &PixelRect, page_width: usize, page_height: usize) -> f64 {
        let page_area = page_width as f64 * page_height as f64;
        if page_area <= 0.0 {
            return 0.0;
        }
        rect.area() as f64 / page_area
    }

    pub fn accepts(&self, rect: &PixelRect, page_width: usize, page_height: usize) -> bool {
        Self::area_fraction(rect, page_width, page_height) > self.min_area_fraction
    }

    /// Keep components above the area cutoff and convert them to page
    /// fractions, preserving input order.
    pub fn apply(
        &self,
        components: &[Component],
        page_width: usize,
        page_height: usize,
    ) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for component in components {
            if self.accepts(&component.rect, page_width, page_height) {
                outcome.boxes.push(BoundingBox::from_pixel_rect(
                    &component.rect,
                    page_width,
                    page_height,
                ));
            } else {
                outcome.discarded += 1;
            }
        }
        outcome
    }
}
