pub mod io;
pub mod rgba;
pub mod traits;

pub use self::io::{ImageCrateSource, PixelSource, RgbaImageU8};
pub use self::rgba::{ImageRgb8, ImageRgba8};
pub use self::traits::{ImageView, Rows};

use crate::error::Result;

/// Check that a view's declared geometry fits its backing buffer.
///
/// Views built through their checked constructors always pass; views built
/// from public fields are verified here before any pixel is read.
pub fn ensure_readable<I: ImageView>(image: &I) -> Result<()> {
    rgba::check_geometry(
        image.width(),
        image.height(),
        image.stride(),
        I::CHANNELS,
        image.byte_len(),
    )
}
