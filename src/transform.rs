use crate::cli::Operation;
use crate::types::PixelBuffer;

/// ITU-R BT.601 luma weights, matching the usual color-to-gray conversion.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Run `operation` on `img`, producing a freshly allocated result.
///
/// An empty input short-circuits to an empty output so that a failed decode
/// degrades to no-op display and write downstream.
pub fn apply(operation: &Operation, img: &PixelBuffer) -> PixelBuffer {
    if img.is_empty() {
        return PixelBuffer::empty();
    }
    match *operation {
        Operation::RgbToGray => rgb_to_gray(img),
        Operation::GrayToRgb => gray_to_rgb(img),
        Operation::Brightness(beta) => adjust_brightness(img, beta),
        Operation::Contrast(alpha) => adjust_contrast(img, alpha),
    }
}

/// Collapse an RGB image to a single luma channel.
///
/// The caller is responsible for passing a 3-channel buffer.
pub fn rgb_to_gray(img: &PixelBuffer) -> PixelBuffer {
    debug_assert_eq!(img.channels, 3);
    let gray: Vec<u8> = img
        .data
        .chunks_exact(3)
        .map(|px| {
            let luma = LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64;
            luma.round().clamp(0.0, 255.0) as u8
        })
        .collect();
    PixelBuffer::new(gray, img.width, img.height, 1)
}

/// Replicate a single gray channel into all three RGB channels.
///
/// The caller is responsible for passing a 1-channel buffer.
pub fn gray_to_rgb(img: &PixelBuffer) -> PixelBuffer {
    debug_assert_eq!(img.channels, 1);
    let mut rgb = Vec::with_capacity(img.data.len() * 3);
    for &val in &img.data {
        rgb.push(val);
        rgb.push(val);
        rgb.push(val);
    }
    PixelBuffer::new(rgb, img.width, img.height, 3)
}

/// Add `beta` to every channel of every pixel, saturating to [0, 255].
pub fn adjust_brightness(img: &PixelBuffer, beta: f64) -> PixelBuffer {
    map_channels(img, |v| v as f64 + beta)
}

/// Multiply every channel of every pixel by `alpha`, saturating to [0, 255].
///
/// `alpha = 0` produces a black image; negative `alpha` clamps to 0 rather
/// than wrapping.
pub fn adjust_contrast(img: &PixelBuffer, alpha: f64) -> PixelBuffer {
    map_channels(img, |v| v as f64 * alpha)
}

fn map_channels<F: Fn(u8) -> f64>(img: &PixelBuffer, f: F) -> PixelBuffer {
    let data: Vec<u8> = img
        .data
        .iter()
        .map(|&v| f(v).round().clamp(0.0, 255.0) as u8)
        .collect();
    PixelBuffer::new(data, img.width, img.height, img.channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_image() -> PixelBuffer {
        // 2x2 RGB: red, green, blue, mid-gray
        let data = vec![
            255, 0, 0, //
            0, 255, 0, //
            0, 0, 255, //
            100, 100, 100,
        ];
        PixelBuffer::new(data, 2, 2, 3)
    }

    fn gray_image() -> PixelBuffer {
        PixelBuffer::new(vec![0, 60, 128, 255], 2, 2, 1)
    }

    #[test]
    fn test_rgb_to_gray_luma_weights() {
        let gray = rgb_to_gray(&color_image());
        assert_eq!(gray.channels, 1);
        assert_eq!((gray.width, gray.height), (2, 2));
        // round(0.299 * 255), round(0.587 * 255), round(0.114 * 255)
        assert_eq!(gray.data, vec![76, 150, 29, 100]);
    }

    #[test]
    fn test_gray_to_rgb_replicates_channel() {
        let rgb = gray_to_rgb(&gray_image());
        assert_eq!(rgb.channels, 3);
        assert_eq!((rgb.width, rgb.height), (2, 2));
        for (px, &src) in rgb.data.chunks_exact(3).zip(gray_image().data.iter()) {
            assert_eq!(px, [src, src, src]);
        }
    }

    #[test]
    fn test_gray_round_trip_preserves_dimensions_only() {
        let img = color_image();
        let back = gray_to_rgb(&rgb_to_gray(&img));
        assert_eq!((back.width, back.height, back.channels), (2, 2, 3));
        // Lossy: the red pixel does not survive the trip
        assert_ne!(back.data, img.data);
    }

    #[test]
    fn test_brightness_zero_is_identity() {
        let img = color_image();
        assert_eq!(adjust_brightness(&img, 0.0), img);
    }

    #[test]
    fn test_brightness_adds_and_saturates() {
        let out = adjust_brightness(&gray_image(), 50.0);
        assert_eq!(out.data, vec![50, 110, 178, 255]);
    }

    #[test]
    fn test_brightness_negative_clamps_to_zero() {
        let out = adjust_brightness(&gray_image(), -100.0);
        assert_eq!(out.data, vec![0, 0, 28, 155]);
    }

    #[test]
    fn test_contrast_one_is_identity() {
        let img = color_image();
        assert_eq!(adjust_contrast(&img, 1.0), img);
    }

    #[test]
    fn test_contrast_scales_and_saturates() {
        let out = adjust_contrast(&gray_image(), 2.5);
        assert_eq!(out.data, vec![0, 150, 255, 255]);
    }

    #[test]
    fn test_contrast_zero_is_black() {
        let out = adjust_contrast(&color_image(), 0.0);
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_contrast_negative_clamps_to_zero() {
        let out = adjust_contrast(&gray_image(), -1.0);
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_transforms_do_not_mutate_input() {
        let img = color_image();
        let _ = rgb_to_gray(&img);
        let _ = adjust_brightness(&img, 10.0);
        assert_eq!(img, color_image());
    }

    #[test]
    fn test_apply_dispatches() {
        let img = gray_image();
        assert_eq!(apply(&Operation::GrayToRgb, &img), gray_to_rgb(&img));
        assert_eq!(
            apply(&Operation::Brightness(5.0), &img),
            adjust_brightness(&img, 5.0)
        );
        assert_eq!(
            apply(&Operation::Contrast(0.5), &img),
            adjust_contrast(&img, 0.5)
        );
    }

    #[test]
    fn test_apply_on_empty_input_is_empty() {
        let out = apply(&Operation::RgbToGray, &PixelBuffer::empty());
        assert!(out.is_empty());
    }
}
