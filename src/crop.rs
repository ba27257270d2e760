//! Cutting detected panels out of the page and exporting them as PNG.
//!
//! Boxes are scaled back to pixels with [`BoundingBox::to_pixel_rect`], so a
//! box produced by the detector maps onto exactly the component's rectangle.
//! Crops are numbered from 1 in the order the boxes are given, which for
//! detector output is reading order. Export encodes the crops in parallel.

use crate::error::{PanelError, Result};
use crate::image::io::encode_rgba_png;
use crate::image::{ensure_readable, ImageView};
use crate::types::{BoundingBox, PixelRect};
use image::RgbaImage;
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// One panel cut from the page.
#[derive(Clone, Debug)]
pub struct PanelCrop {
    /// 1-based position in reading order.
    pub index: usize,
    pub rect: PixelRect,
    pub image: RgbaImage,
}

impl PanelCrop {
    pub fn file_name(&self) -> String {
        format!("frame-{}.png", self.index)
    }
}

/// Copy the pixels under `bbox` into a standalone RGBA image. Three-channel
/// sources get an opaque alpha channel. A view whose geometry does not fit
/// its buffer fails with `PanelError::SurfaceAcquisition`.
pub fn crop_panel<I: ImageView>(image: &I, bbox: &BoundingBox, index: usize) -> Result<PanelCrop> {
    ensure_readable(image)?;
    let rect = bbox.to_pixel_rect(image.width(), image.height());
    let mut data = Vec::with_capacity(rect.area() * 4);
    for row in image.rows().skip(rect.y).take(rect.height) {
        let start = rect.x * I::CHANNELS;
        let end = (rect.x + rect.width) * I::CHANNELS;
        if I::CHANNELS == 4 {
            data.extend_from_slice(&row[start..end]);
        } else {
            for px in row[start..end].chunks_exact(I::CHANNELS) {
                data.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
    }
    let len = data.len();
    let image = RgbaImage::from_vec(rect.width as u32, rect.height as u32, data).ok_or_else(|| {
        PanelError::surface(format!(
            "crop {index} collected {len} bytes for a {}x{} region",
            rect.width, rect.height
        ))
    })?;
    Ok(PanelCrop { index, rect, image })
}

/// Crop every box, numbering the results from 1.
pub fn crop_panels<I: ImageView>(image: &I, boxes: &[BoundingBox]) -> Result<Vec<PanelCrop>> {
    boxes
        .iter()
        .enumerate()
        .map(|(i, bbox)| crop_panel(image, bbox, i + 1))
        .collect()
}

pub fn encode_png(crop: &PanelCrop) -> Result<Vec<u8>> {
    encode_rgba_png(&crop.image).map_err(|source| PanelError::Encode {
        index: crop.index,
        source,
    })
}

/// Write each crop to `dir/frame-<index>.png`, creating `dir` if needed.
/// Returns the written paths in crop order.
pub fn export_panels(dir: &Path, crops: &[PanelCrop]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| PanelError::io(dir, e))?;
    let paths = crops
        .par_iter()
        .map(|crop| {
            let bytes = encode_png(crop)?;
            let path = dir.join(crop.file_name());
            fs::write(&path, bytes).map_err(|e| PanelError::io(&path, e))?;
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("export_panels wrote {} files to {}", paths.len(), dir.display());
    Ok(paths)
}
