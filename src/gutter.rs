//! Per-pixel gutter/ink classification.
//!
//! A pixel belongs to the gutter when all of its R, G and B channels are
//! strictly brighter than the configured threshold. Alpha never participates.

/// Default brightness threshold separating gutter from ink.
pub const DEFAULT_GUTTER_THRESHOLD: u8 = 245;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GutterClassifier {
    threshold: u8,
}

impl Default for GutterClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_GUTTER_THRESHOLD)
    }
}

impl GutterClassifier {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn is_gutter(&self, r: u8, g: u8, b: u8) -> bool {
        r > self.threshold && g > self.threshold && b > self.threshold
    }

    #[inline]
    pub fn is_gutter_rgb(&self, [r, g, b]: [u8; 3]) -> bool {
        self.is_gutter(r, g, b)
    }
}
