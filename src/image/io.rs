//! I/O helpers for RGBA images and JSON.
//!
//! - `PixelSource`: narrow "encoded bytes → RGBA buffer" capability.
//! - `ImageCrateSource`: default decoder backed by the `image` crate.
//! - `load_rgba_image`: read a PNG/JPEG/WEBP file into an owned RGBA buffer.
//! - `encode_rgba_png`: encode an RGBA image to PNG bytes.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgba::{check_geometry, ImageRgba8};
use crate::error::{PanelError, Result};
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Owned 8-bit RGBA buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl RgbaImageU8 {
    /// Wrap tightly packed RGBA bytes, checking that the length matches.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let stride = width.saturating_mul(4);
        check_geometry(width, height, stride, 4, data.len())?;
        if data.len() != stride * height {
            return Err(PanelError::surface(format!(
                "buffer holds {} bytes but {width}x{height} RGBA needs {}",
                data.len(),
                stride * height
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgba8` view
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl TryFrom<RgbaImage> for RgbaImageU8 {
    type Error = PanelError;

    fn try_from(img: RgbaImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        Self::new(w as usize, h as usize, img.into_raw())
    }
}

/// Produces a decoded RGBA pixel buffer from encoded image bytes.
pub trait PixelSource {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImageU8>;
}

/// Decoder for the raster formats enabled on the `image` crate
/// (PNG, JPEG, WEBP). The format is sniffed from the byte signature.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateSource;

impl PixelSource for ImageCrateSource {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImageU8> {
        let format = image::guess_format(bytes)
            .map_err(|e| PanelError::decode("unrecognised image signature", e))?;
        let img = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| PanelError::decode(format!("{format:?} payload is malformed"), e))?
            .into_rgba8();
        RgbaImageU8::try_from(img)
    }
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImageU8> {
    let bytes = fs::read(path).map_err(|e| PanelError::io(path, e))?;
    ImageCrateSource.decode(&bytes)
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_rgba_png(image: &RgbaImage) -> std::result::Result<Vec<u8>, image::ImageError> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| PanelError::Config {
        path: path.to_path_buf(),
        message: format!("failed to serialize JSON: {e}"),
    })?;
    fs::write(path, json).map_err(|e| PanelError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PanelError::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;
    use image::Rgba;

    #[test]
    fn decodes_png_bytes_into_rgba() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        let png = encode_rgba_png(&img).unwrap();

        let decoded = ImageCrateSource.decode(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert_eq!(decoded.as_view().rgb(1, 1), [10, 20, 30]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = ImageCrateSource.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PanelError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let png = encode_rgba_png(&img).unwrap();
        let err = ImageCrateSource.decode(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, PanelError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn owned_buffer_rejects_length_mismatch() {
        let err = RgbaImageU8::new(2, 2, vec![0; 20]).unwrap_err();
        assert!(matches!(err, PanelError::SurfaceAcquisition { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_rgba_image(Path::new("no/such/page.png")).unwrap_err();
        assert!(matches!(err, PanelError::Io { .. }));
    }
}
