use serde::{Deserialize, Serialize};

/// Integer pixel rectangle with inclusive origin and positive extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PixelRect {
    /// Build from inclusive min/max corners.
    pub fn from_extent(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn max_x(&self) -> usize {
        self.x + self.width - 1
    }

    pub fn max_y(&self) -> usize {
        self.y + self.height - 1
    }
}

/// Panel location as fractions of the page width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Fractional box for `rect` on a `page_width × page_height` page.
    pub fn from_pixel_rect(rect: &PixelRect, page_width: usize, page_height: usize) -> Self {
        let w = page_width as f64;
        let h = page_height as f64;
        Self {
            x: rect.x as f64 / w,
            y: rect.y as f64 / h,
            width: rect.width as f64 / w,
            height: rect.height as f64 / h,
        }
    }

    /// Scale back to pixels on a page of the given size.
    ///
    /// Coordinates are rounded to the nearest pixel and clamped so the result
    /// lies inside the page and covers at least one pixel.
    pub fn to_pixel_rect(&self, page_width: usize, page_height: usize) -> PixelRect {
        let (x, width) = scale_span(self.x, self.width, page_width);
        let (y, height) = scale_span(self.y, self.height, page_height);
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

fn scale_span(start: f64, len: f64, extent: usize) -> (usize, usize) {
    let extent_f = extent as f64;
    let max_start = extent.saturating_sub(1);
    let s = ((start * extent_f).round().max(0.0) as usize).min(max_start);
    let e = ((start + len) * extent_f).round().max(0.0) as usize;
    let e = e.clamp(s + 1, extent.max(s + 1));
    (s, e - s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_rect_from_inclusive_extent() {
        let r = PixelRect::from_extent(3, 4, 3, 9);
        assert_eq!((r.width, r.height), (1, 6));
        assert_eq!((r.max_x(), r.max_y()), (3, 9));
        assert_eq!(r.area(), 6);
    }

    #[test]
    fn fractional_box_scales_back_to_pixels() {
        let rect = PixelRect {
            x: 17,
            y: 40,
            width: 333,
            height: 121,
        };
        let bb = BoundingBox::from_pixel_rect(&rect, 1000, 700);
        assert!(bb.x + bb.width <= 1.0 && bb.y + bb.height <= 1.0);
        assert_eq!(bb.to_pixel_rect(1000, 700), rect);
    }

    #[test]
    fn out_of_range_box_is_clamped_to_page() {
        let bb = BoundingBox {
            x: 0.9,
            y: -0.1,
            width: 0.5,
            height: 0.05,
        };
        let r = bb.to_pixel_rect(100, 100);
        assert_eq!(r.x, 90);
        assert_eq!(r.width, 10);
        assert_eq!(r.y, 0);
        assert_eq!(r.height, 1);
    }
}
