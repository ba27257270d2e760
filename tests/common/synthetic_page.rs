/// Pure white, well above the default gutter threshold.
pub const PAPER: [u8; 4] = [255, 255, 255, 255];
pub const INK: [u8; 4] = [40, 40, 40, 255];

/// Packed RGBA page filled with a single colour.
pub fn blank_page(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "page dimensions must be positive");
    color.repeat(width * height)
}

/// Fill the inclusive-exclusive rectangle `[x, x+w) x [y, y+h)`.
pub fn fill_rect(
    buf: &mut [u8],
    width: usize,
    (x, y, w, h): (usize, usize, usize, usize),
    color: [u8; 4],
) {
    for row in y..y + h {
        for col in x..x + w {
            let i = (row * width + col) * 4;
            buf[i..i + 4].copy_from_slice(&color);
        }
    }
}

/// White page with solid ink rectangles given as `(x, y, w, h)`.
pub fn page_with_rects(width: usize, height: usize, rects: &[(usize, usize, usize, usize)]) -> Vec<u8> {
    let mut buf = blank_page(width, height, PAPER);
    for &rect in rects {
        fill_rect(&mut buf, width, rect, INK);
    }
    buf
}

/// A `cols x rows` grid of panels separated by `gutter`-wide white strips,
/// with the same margin around the page edge.
pub fn grid_page(width: usize, height: usize, cols: usize, rows: usize, gutter: usize) -> Vec<u8> {
    let panel_w = (width - gutter * (cols + 1)) / cols;
    let panel_h = (height - gutter * (rows + 1)) / rows;
    let mut rects = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            rects.push((
                gutter + c * (panel_w + gutter),
                gutter + r * (panel_h + gutter),
                panel_w,
                panel_h,
            ));
        }
    }
    page_with_rects(width, height, &rects)
}
