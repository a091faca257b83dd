use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-file failures keep their cause so callers can tell an unreadable
/// file from an image that simply cannot fit under the ceiling.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Failed to open {0}: {1}")]
    Open(PathBuf, #[source] io::Error),

    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("Encoder rejected image data: {0}")]
    Encode(#[source] image::ImageError),

    #[error(
        "No quality from {initial} down to {floor} fits under {ceiling_kib} KiB \
         (smallest attempt was {smallest_kib:.1} KiB)"
    )]
    SizeUnattainable {
        ceiling_kib: u32,
        initial: u8,
        floor: u8,
        smallest_kib: f64,
    },

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, #[source] io::Error),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Quality floor {floor} exceeds starting quality {initial}")]
    QualityRangeInverted { floor: u8, initial: u8 },

    #[error("Quality step must be at least 1")]
    ZeroQualityStep,

    #[error("Input directory not found: {0}")]
    InputRootMissing(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
