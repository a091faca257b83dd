use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Smooth gradient; compresses well at any quality.
pub fn write_gradient_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
    .save(path)
    .unwrap();
}

/// Translucent image; exercises the normalization path.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([180, 60, 60, 120]))
        .save(path)
        .unwrap();
}

/// Deterministic per-pixel noise; resists compression at every quality.
pub fn write_noise_png(path: &Path, width: u32, height: u32) {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    RgbImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let b = state.to_le_bytes();
        Rgb([b[0], b[1], b[2]])
    })
    .save(path)
    .unwrap();
}

/// A file with an image extension but no image content.
pub fn write_garbage(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"this is not an image at all")
        .unwrap();
}
