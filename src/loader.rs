use std::path::Path;

use crate::types::PixelBuffer;

/// Decode an image file, preserving its native channel count.
///
/// Sources without color information collapse to a single luma channel;
/// everything else becomes 3-channel RGB (alpha dropped, deeper bit depths
/// normalized to 8-bit). A failed decode returns the empty buffer instead
/// of an error, so a bad path degrades to no-op display and write.
pub fn load<P: AsRef<Path>>(path: P) -> PixelBuffer {
    let path = path.as_ref();
    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Warning: could not decode {}: {}", path.display(), e);
            return PixelBuffer::empty();
        }
    };

    if decoded.color().has_color() {
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        PixelBuffer::new(rgb.into_raw(), width, height, 3)
    } else {
        let gray = decoded.to_luma8();
        let (width, height) = gray.dimensions();
        PixelBuffer::new(gray.into_raw(), width, height, 1)
    }
}
