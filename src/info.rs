use crate::constants::DEFAULT_MAX_SIZE_KIB;
use crate::error::{CompressionError, Result};
use crate::normalize::needs_normalization;
use image::{GenericImageView, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Prints what the compressor would see for one file: decoded shape,
/// whether normalization would kick in, and how the current size sits
/// against the default ceiling.
pub fn print_image_info(input: &Path) -> Result<()> {
    let data = fs::read(input).map_err(|e| CompressionError::Open(input.to_path_buf(), e))?;
    let size_kib = data.len() as f64 / 1024.0;

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| CompressionError::Open(input.to_path_buf(), e))?;
    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| CompressionError::Decode(input.to_path_buf(), e))?;

    let (width, height) = img.dimensions();

    println!("📋 {}", input.display());
    println!("  📏 Dimensions: {}x{} pixels", width, height);
    println!("  🎨 Color type: {:?}", img.color());
    println!("  🎭 Detected format: {:?}", format);
    println!("  📦 File size: {:.1} KiB", size_kib);

    if needs_normalization(&img) {
        println!("  🔄 Needs RGB normalization before JPEG encoding");
    } else {
        println!("  ✅ Already JPEG-encodable without conversion");
    }

    if size_kib <= DEFAULT_MAX_SIZE_KIB as f64 {
        println!(
            "  🎯 Already within the default {} KiB ceiling",
            DEFAULT_MAX_SIZE_KIB
        );
    } else {
        println!(
            "  🎯 Exceeds the default {} KiB ceiling",
            DEFAULT_MAX_SIZE_KIB
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_info_missing_file() {
        let result = print_image_info(Path::new("nonexistent.jpg"));
        assert!(matches!(result, Err(CompressionError::Open(_, _))));
    }

    #[test]
    fn test_info_decodes_real_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiny.png");
        image::RgbImage::from_pixel(3, 3, image::Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        assert!(print_image_info(&path).is_ok());
    }
}
