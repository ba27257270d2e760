/// Read-only access to an interleaved 8-bit image.
///
/// `stride` is measured in bytes between consecutive rows, `row(y)` returns
/// exactly `width * CHANNELS` bytes.
pub trait ImageView {
    /// Interleaved channels per pixel; the first three are R, G, B.
    const CHANNELS: usize;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[u8];

    /// Length of the backing byte buffer.
    fn byte_len(&self) -> usize;

    /// R, G, B of the pixel at (x, y). Alpha, when present, is not returned.
    #[inline]
    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let row = self.row(y);
        let i = x * Self::CHANNELS;
        [row[i], row[i + 1], row[i + 2]]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
