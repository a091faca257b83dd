use crate::compress::compress_file;
use crate::config::Settings;
use crate::constants::{OUTPUT_EXTENSION, SUPPORTED_INPUT_EXTENSIONS};
use crate::error::{CompressionError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
}

/// Allow-list decision: lowercase extension match only. Content is not
/// sniffed here; a mislabeled file is rejected later by the decoder.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_INPUT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Mirrors the input's relative directory structure under the output
/// root and substitutes the JPEG extension, whatever the source was.
pub fn output_path_for(input: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = input.strip_prefix(input_root).unwrap_or(input);
    output_root.join(relative).with_extension(OUTPUT_EXTENSION)
}

/// Walks the input root and collects every allow-listed file. A missing
/// root or an unreadable directory entry is fatal to the whole run;
/// unsupported files are simply never visited.
pub fn collect_input_files(input_root: &Path) -> Result<Vec<PathBuf>> {
    if !input_root.is_dir() {
        return Err(CompressionError::InputRootMissing(input_root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_root) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_input(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Compresses every supported file under `input_root` into a mirrored
/// tree under `output_root`, one file at a time. Per-file failures are
/// logged and counted, never abort the walk.
pub fn batch_compress(
    input_root: &Path,
    output_root: &Path,
    settings: &Settings,
) -> Result<BatchSummary> {
    settings.validate()?;

    let start_time = Instant::now();
    let files = collect_input_files(input_root)?;

    if files.is_empty() {
        println!("⚠️  No image files found under {}", input_root.display());
        return Ok(BatchSummary::default());
    }

    println!(
        "🚀 Compressing {} files to ≤{} KiB each",
        files.len(),
        settings.max_size_kib
    );

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = BatchSummary::default();
    for input in &files {
        compress_one(input, input_root, output_root, settings, &mut summary);
        progress.inc(1);
    }
    progress.finish_and_clear();

    print_summary(&summary, start_time.elapsed());
    Ok(summary)
}

// Per-file result lines go straight to stdout; the progress bar draws
// on stderr and stays out of the log.
fn compress_one(
    input: &Path,
    input_root: &Path,
    output_root: &Path,
    settings: &Settings,
    summary: &mut BatchSummary,
) {
    let output = output_path_for(input, input_root, output_root);

    if let Some(parent) = output.parent() {
        if fs::create_dir_all(parent).is_err() {
            summary.failed += 1;
            println!(
                "❌ {}: {}",
                input.display(),
                CompressionError::DirectoryCreationFailed(parent.to_path_buf())
            );
            return;
        }
    }

    match compress_file(input, &output, settings) {
        Ok(report) => {
            summary.processed += 1;
            summary.total_size_before += report.original_size;
            summary.total_size_after += report.compressed_size;
            println!(
                "✅ {} → {} ({} → {}, quality {})",
                input.display(),
                output.display(),
                format_file_size(report.original_size),
                format_file_size(report.compressed_size),
                report.quality
            );
        }
        Err(e) => {
            summary.failed += 1;
            println!("❌ {}: {}", input.display(), e);
        }
    }
}

fn print_summary(summary: &BatchSummary, elapsed: Duration) {
    println!("\n📊 Batch Summary:");
    println!("  ✅ Compressed: {}", summary.processed);
    if summary.failed > 0 {
        println!("  ❌ Failed: {}", summary.failed);
    }
    println!(
        "  📦 Total size: {} → {}",
        format_file_size(summary.total_size_before),
        format_file_size(summary.total_size_after)
    );
    println!(
        "  🎯 Overall reduction: {:.1}%",
        compression_ratio(summary.total_size_before, summary.total_size_after)
    );
    println!("  ⏱️  Elapsed: {:.2?}", elapsed);
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Percentage reduction; negative means the output grew.
pub fn compression_ratio(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    ((before as f64 - after as f64) / before as f64) * 100.0
}
