use crate::config::Settings;
use crate::error::{CompressionError, Result};
use crate::normalize::to_encoder_native;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// What the quality search settled on for one file.
#[derive(Debug, Clone, Copy)]
pub struct CompressionReport {
    /// Quality the accepted encoding used.
    pub quality: u8,
    /// Encode passes the search made, including the accepted one.
    pub passes: u32,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// Decodes `input`, normalizes it for JPEG encoding if needed, searches
/// quality levels until the encoded size fits under the ceiling, and
/// writes the accepted buffer to `output`.
///
/// Exactly one file write happens on success; every failure path leaves
/// nothing behind at `output`.
pub fn compress_file(input: &Path, output: &Path, settings: &Settings) -> Result<CompressionReport> {
    settings.validate()?;

    let data = fs::read(input).map_err(|e| CompressionError::Open(input.to_path_buf(), e))?;
    let original_size = data.len() as u64;

    let img = decode(input, data)?;
    let img = to_encoder_native(img);

    let (buf, quality, passes) = search_quality(&img, settings)?;

    fs::write(output, &buf).map_err(|e| CompressionError::Write(output.to_path_buf(), e))?;

    Ok(CompressionReport {
        quality,
        passes,
        original_size,
        compressed_size: buf.len() as u64,
    })
}

/// Decode by sniffing content, never by trusting the extension.
fn decode(path: &Path, data: Vec<u8>) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| CompressionError::Open(path.to_path_buf(), e))?;
    reader
        .decode()
        .map_err(|e| CompressionError::Decode(path.to_path_buf(), e))
}

/// Linear scan from the starting quality down to the floor, returning
/// the first buffer whose size fits under the ceiling.
///
/// The quality-to-size curve is not smooth enough to bisect safely, and
/// the schedule is short (19 passes at the defaults), so the search is
/// strictly decreasing. An encoder failure aborts immediately and is
/// never retried at another quality.
pub fn search_quality(img: &DynamicImage, settings: &Settings) -> Result<(Vec<u8>, u8, u32)> {
    let ceiling_kib = settings.max_size_kib as f64;
    let mut quality = settings.initial_quality;
    let mut passes = 0u32;
    let mut smallest_kib = f64::INFINITY;

    loop {
        let buf = encode_jpeg(img, quality)?;
        passes += 1;

        let size_kib = buf.len() as f64 / 1024.0;
        if size_kib <= ceiling_kib {
            return Ok((buf, quality, passes));
        }
        smallest_kib = smallest_kib.min(size_kib);

        match quality.checked_sub(settings.quality_step) {
            Some(next) if next >= settings.min_quality => quality = next,
            _ => break,
        }
    }

    Err(CompressionError::SizeUnattainable {
        ceiling_kib: settings.max_size_kib,
        initial: settings.initial_quality,
        floor: settings.min_quality,
        smallest_kib,
    })
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)
        .map_err(CompressionError::Encode)?;
    Ok(buf)
}
