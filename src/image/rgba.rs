//! Borrowed 8-bit RGBA and RGB views over interleaved row-major bytes.
//!
//! Fields are public so callers can wrap existing buffers without copying;
//! [`ImageRgba8::new`] and [`ImageRgb8::new`] additionally check that the
//! buffer is large enough for the declared geometry.
use super::traits::ImageView;
use crate::error::{PanelError, Result};

#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// Tightly packed view (`stride == 4 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::new(w, h, w.saturating_mul(4), data)
    }

    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        check_geometry(w, h, stride, 4, data.len())?;
        Ok(Self { w, h, stride, data })
    }
}

impl<'a> ImageRgb8<'a> {
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::new(w, h, w.saturating_mul(3), data)
    }

    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        check_geometry(w, h, stride, 3, data.len())?;
        Ok(Self { w, h, stride, data })
    }
}

impl<'a> ImageView for ImageRgba8<'a> {
    const CHANNELS: usize = 4;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 4]
    }
    #[inline]
    fn byte_len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> ImageView for ImageRgb8<'a> {
    const CHANNELS: usize = 3;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 3]
    }
    #[inline]
    fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Validate that `len` bytes can hold a `w × h` image with the given layout.
pub(crate) fn check_geometry(
    w: usize,
    h: usize,
    stride: usize,
    channels: usize,
    len: usize,
) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(PanelError::surface(format!(
            "image has zero area ({w}x{h})"
        )));
    }
    let row_bytes = w
        .checked_mul(channels)
        .ok_or_else(|| PanelError::surface(format!("row of {w} pixels overflows")))?;
    if stride < row_bytes {
        return Err(PanelError::surface(format!(
            "stride {stride} is shorter than a row of {row_bytes} bytes"
        )));
    }
    let required = (h - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or_else(|| PanelError::surface(format!("{w}x{h} image overflows")))?;
    if len < required {
        return Err(PanelError::surface(format!(
            "buffer holds {len} bytes but {w}x{h} needs {required}"
        )));
    }
    Ok(())
}
