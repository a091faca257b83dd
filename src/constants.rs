/// Default ceiling for an accepted output file, in binary kilobytes.
pub const DEFAULT_MAX_SIZE_KIB: u32 = 480;

/// Default floor of the quality search.
pub const DEFAULT_MIN_QUALITY: u8 = 10;

/// Default starting point of the quality search.
pub const DEFAULT_INITIAL_QUALITY: u8 = 100;

/// Default decrement between passes.
pub const DEFAULT_QUALITY_STEP: u8 = 5;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Extensions eligible for compression, matched case-insensitively on
/// the extension alone. Content is sniffed separately at decode time.
pub const SUPPORTED_INPUT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Every accepted file is re-encoded as JPEG under the output root.
pub const OUTPUT_EXTENSION: &str = "jpg";
