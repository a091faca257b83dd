pub mod batch;
pub mod cli;
pub mod compress;
pub mod config;
pub mod constants;
pub mod error;
pub mod info;
pub mod normalize;

pub use batch::{
    batch_compress, collect_input_files, is_supported_input, output_path_for, BatchSummary,
};
pub use compress::{compress_file, search_quality, CompressionReport};
pub use config::Settings;
pub use error::{CompressionError, Result};
pub use info::print_image_info;
pub use normalize::{jpeg_encodable, needs_normalization, to_encoder_native};
