use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{GrayImage, RgbImage};

use crate::types::PixelBuffer;

/// Encode `img` as PNG at `path`, overwriting any existing file.
///
/// Returns `Ok(false)` when the buffer is empty and the write was skipped,
/// `Ok(true)` when the file was written.
pub fn write_png<P: AsRef<Path>>(img: &PixelBuffer, path: P) -> Result<bool> {
    if img.is_empty() {
        return Ok(false);
    }

    let path = path.as_ref();
    match img.channels {
        1 => {
            let buffer = GrayImage::from_raw(img.width, img.height, img.data.clone())
                .context("Pixel data does not match image dimensions")?;
            buffer
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        3 => {
            let buffer = RgbImage::from_raw(img.width, img.height, img.data.clone())
                .context("Pixel data does not match image dimensions")?;
            buffer
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        n => bail!("Unsupported channel count for PNG output: {}", n),
    }

    Ok(true)
}
