//! Conversion of decoded pixel sources into a layout the JPEG encoder
//! accepts. The decision is a capability check on the decoded color
//! type, never a match on the source format tag, so adding a decoder
//! never requires touching the compressor.

use image::{ColorType, DynamicImage};

/// Pixel layouts the JPEG encoder takes without conversion.
pub fn jpeg_encodable(color: ColorType) -> bool {
    matches!(color, ColorType::L8 | ColorType::Rgb8)
}

pub fn needs_normalization(img: &DynamicImage) -> bool {
    !jpeg_encodable(img.color())
}

/// Returns `img` unchanged when the encoder already accepts it,
/// otherwise a freshly allocated RGB8 grid with the same bounds, every
/// pixel read from the source. Direct channel composition only: no
/// color-space conversion, no alpha blending. Alpha is dropped here
/// because the JPEG encoder rejects it outright.
pub fn to_encoder_native(img: DynamicImage) -> DynamicImage {
    if jpeg_encodable(img.color()) {
        img
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    }
}
