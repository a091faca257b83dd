use clap::Parser;
use img_cap::batch::{batch_compress, format_file_size};
use img_cap::cli::{Args, Commands};
use img_cap::compress::compress_file;
use img_cap::config::Settings;
use img_cap::error::Result;
use img_cap::info::print_image_info;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Compress {
            input,
            output,
            max_size_kib,
            min_quality,
            initial_quality,
            step,
        } => {
            let settings = Settings::new(max_size_kib, min_quality, initial_quality, step)?;
            let report = compress_file(&input, &output, &settings)?;
            println!(
                "✅ {} → {} ({} → {}, quality {}, {} passes)",
                input.display(),
                output.display(),
                format_file_size(report.original_size),
                format_file_size(report.compressed_size),
                report.quality,
                report.passes
            );
        }
        Commands::Batch {
            input,
            output,
            max_size_kib,
            min_quality,
            initial_quality,
            step,
        } => {
            let settings = Settings::new(max_size_kib, min_quality, initial_quality, step)?;
            batch_compress(&input, &output, &settings)?;
        }
        Commands::Info { input } => {
            print_image_info(&input)?;
        }
    }

    Ok(())
}
