use std::time::Duration;

use anyhow::Result;
use minifb::{Window, WindowOptions};

use crate::types::PixelBuffer;

/// Open one preview window per non-empty buffer and block until a key is
/// pressed in any of them or every window has been closed.
///
/// On a headless system window creation fails; that is reported as a
/// warning and the call returns without blocking so the pipeline can still
/// finish.
pub fn show_previews(images: &[(&str, &PixelBuffer)]) -> Result<()> {
    let mut windows = Vec::new();

    for &(title, img) in images {
        if img.is_empty() {
            continue;
        }
        let width = img.width as usize;
        let height = img.height as usize;
        match Window::new(title, width, height, WindowOptions::default()) {
            Ok(mut window) => {
                window.limit_update_rate(Some(Duration::from_micros(16_600)));
                windows.push((window, pack_0rgb(img), width, height));
            }
            Err(e) => {
                eprintln!("Warning: could not open preview window {:?}: {}", title, e);
            }
        }
    }

    if windows.is_empty() {
        return Ok(());
    }

    loop {
        let mut any_open = false;
        for (window, buffer, width, height) in windows.iter_mut() {
            if !window.is_open() {
                continue;
            }
            any_open = true;
            window.update_with_buffer(buffer, *width, *height)?;
            if !window.get_keys().is_empty() {
                return Ok(());
            }
        }
        if !any_open {
            return Ok(());
        }
    }
}

/// Pack interleaved 8-bit pixels into the 0RGB u32 layout minifb expects.
/// Grayscale replicates the single channel into R, G and B.
fn pack_0rgb(img: &PixelBuffer) -> Vec<u32> {
    match img.channels {
        1 => img
            .data
            .iter()
            .map(|&v| {
                let v = v as u32;
                (v << 16) | (v << 8) | v
            })
            .collect(),
        _ => img
            .data
            .chunks_exact(3)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_gray_replicates_channel() {
        let img = PixelBuffer::new(vec![0x00, 0x7f, 0xff], 3, 1, 1);
        assert_eq!(pack_0rgb(&img), vec![0x000000, 0x7f7f7f, 0xffffff]);
    }

    #[test]
    fn test_pack_rgb_orders_channels() {
        let img = PixelBuffer::new(vec![0x12, 0x34, 0x56], 1, 1, 3);
        assert_eq!(pack_0rgb(&img), vec![0x123456]);
    }
}
