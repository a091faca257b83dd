use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-cap",
    about = "Batch image compressor that squeezes every image under a byte-size ceiling",
    long_about = "img-cap re-encodes images as JPEG, lowering quality step by step until the \
                  output fits under a kilobyte ceiling. It accepts JPEG, PNG and WebP inputs, \
                  normalizes paletted and alpha-bearing images for JPEG encoding, and mirrors \
                  a whole directory tree in batch mode.",
    version,
    after_help = "EXAMPLES:\n  \
    img-cap compress photo.png photo.jpg -s 200\n  \
    img-cap batch ./images ./img_cmp --max-size-kib 480 --step 5\n  \
    img-cap info photo.png"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress a single image to fit under the size ceiling",
        long_about = "Decode one image, re-encode it as JPEG at decreasing quality until it \
                      fits under the ceiling, and write it to the given output path. Fails \
                      without writing anything if even the quality floor is too large."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(help = "Output JPEG file path")]
        output: PathBuf,

        #[arg(
            short = 's',
            long,
            help = "Size ceiling in KiB (default: 480)",
            long_help = "Inclusive ceiling for the encoded output, in binary kilobytes. \
                         The first quality level whose output fits is accepted."
        )]
        max_size_kib: Option<u32>,

        #[arg(
            long,
            help = "Quality floor (1-100, default: 10)",
            long_help = "Lowest quality the search will try before giving up on the file."
        )]
        min_quality: Option<u8>,

        #[arg(
            long,
            help = "Starting quality (1-100, default: 100)",
            long_help = "Quality of the first encode pass. Must not be below the floor."
        )]
        initial_quality: Option<u8>,

        #[arg(
            long,
            help = "Quality decrement per pass (default: 5)",
            long_help = "How much quality drops after each pass that misses the ceiling."
        )]
        step: Option<u8>,
    },

    #[command(
        about = "Compress a directory tree into a mirrored output tree",
        long_about = "Walk the input directory recursively, compress every jpg/jpeg/png/webp \
                      file under the ceiling, and write the results as JPEG under the output \
                      root with the same relative structure. Per-file failures are logged and \
                      counted without stopping the run."
    )]
    Batch {
        #[arg(help = "Input directory root")]
        input: PathBuf,

        #[arg(help = "Output directory root")]
        output: PathBuf,

        #[arg(
            short = 's',
            long,
            help = "Size ceiling in KiB (default: 480)",
            long_help = "Inclusive ceiling applied to every file in the batch."
        )]
        max_size_kib: Option<u32>,

        #[arg(
            long,
            help = "Quality floor (1-100, default: 10)",
            long_help = "Lowest quality the search will try before marking a file as failed."
        )]
        min_quality: Option<u8>,

        #[arg(
            long,
            help = "Starting quality (1-100, default: 100)",
            long_help = "Quality of the first encode pass for every file."
        )]
        initial_quality: Option<u8>,

        #[arg(
            long,
            help = "Quality decrement per pass (default: 5)",
            long_help = "How much quality drops after each pass that misses the ceiling."
        )]
        step: Option<u8>,
    },

    #[command(
        about = "Display what the compressor would see for one image",
        long_about = "Decode an image and report its dimensions, color type, detected format, \
                      current size, and whether it would need RGB normalization."
    )]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,
    },
}
