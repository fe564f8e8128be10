/// Decoded raster image: interleaved 8-bit channels, row-major.
///
/// `channels` is 1 (grayscale) or 3 (RGB). A failed decode is represented
/// by the empty buffer rather than an error; downstream stages no-op on it.
#[derive(Clone, PartialEq, Debug)]
pub struct PixelBuffer {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * channels as usize);
        PixelBuffer {
            data,
            width,
            height,
            channels,
        }
    }

    /// The zero-dimension buffer returned by the loader on decode failure.
    pub fn empty() -> Self {
        PixelBuffer {
            data: Vec::new(),
            width: 0,
            height: 0,
            channels: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let img = PixelBuffer::empty();
        assert!(img.is_empty());
        assert_eq!(img.data.len(), 0);
    }

    #[test]
    fn test_valid_buffer() {
        let img = PixelBuffer::new(vec![0u8; 2 * 3 * 3], 2, 3, 3);
        assert!(!img.is_empty());
        assert_eq!(img.width, 2);
        assert_eq!(img.height, 3);
        assert_eq!(img.channels, 3);
    }
}
