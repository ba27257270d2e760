use crate::types::PixelRect;
use serde::Serialize;

/// One 4-connected ink region reduced to its bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub rect: PixelRect,
    /// Number of ink pixels in the region.
    pub pixel_count: usize,
}

/// Running min/max extent of the region currently being grown.
pub(crate) struct RegionAccumulator {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
    pixels: usize,
}

impl RegionAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
            pixels: 0,
        }
    }

    /// Start a degenerate extent at the seed pixel.
    pub(crate) fn reset(&mut self, x: usize, y: usize) {
        self.min_x = x;
        self.max_x = x;
        self.min_y = y;
        self.max_y = y;
        self.pixels = 0;
    }

    pub(crate) fn push(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.pixels += 1;
    }

    pub(crate) fn to_component(&self) -> Component {
        Component {
            rect: PixelRect::from_extent(self.min_x, self.min_y, self.max_x, self.max_y),
            pixel_count: self.pixels,
        }
    }
}
