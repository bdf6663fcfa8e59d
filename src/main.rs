use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use upload_compressor::image_pipeline::{
    CompressedImage, CompressionOptions, CompressionPipeline, DEFAULT_MAX_SIZE_BYTES, SourceImage,
    format_file_size, should_compress,
};
use upload_compressor::logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    /// Full result record as JSON
    Json,
    /// `data:<type>;base64,...`
    DataUrl,
    /// Encoded image bytes
    Raw,
}

/// Shrinks an image to a byte budget the way the upload form does.
#[derive(Debug, Parser)]
#[command(name = "upload-compressor", version)]
struct Cli {
    /// Image to compress
    input: PathBuf,

    /// Write here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 1200)]
    max_width: u32,

    #[arg(long, default_value_t = 800)]
    max_height: u32,

    /// Initial quality in (0, 1]
    #[arg(short, long, default_value_t = 0.8)]
    quality: f32,

    /// Byte budget
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE_BYTES)]
    max_size: u64,

    #[arg(long, value_enum, default_value_t = Emit::Json)]
    format: Emit,

    /// Compress even when the file is already under budget
    #[arg(long)]
    force: bool,

    /// Print per-step timings to stderr
    #[arg(long)]
    timings: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let options = CompressionOptions::builder()
        .max_width(cli.max_width)
        .max_height(cli.max_height)
        .quality(cli.quality)
        .max_size_bytes(cli.max_size)
        .build();
    let pipeline = CompressionPipeline::new(options);

    let source = SourceImage::from_path(&cli.input)?;
    info!(
        file = %source.file_name,
        content_type = %source.content_type,
        size = %format_file_size(source.size),
        "Loaded input"
    );

    let result = if cli.force || should_compress(&source, cli.max_size) {
        let (result, timings) = pipeline.compress_with_timings(&source)?;
        if cli.timings {
            timings.write_summary(&mut std::io::stderr())?;
        }
        result
    } else {
        info!("Input already under budget, passing through");
        let dimensions = pipeline.dimensions(&source)?;
        CompressedImage::passthrough(&source, dimensions)
    };

    info!(
        width = result.width,
        height = result.height,
        original = %format_file_size(result.original_size),
        compressed = %format_file_size(result.compressed_size),
        ratio = %format!("{:.2}", result.compression_ratio),
        fallback = result.used_fallback,
        "Done"
    );

    let payload = match cli.format {
        Emit::Json => serde_json::to_vec_pretty(&result)?,
        Emit::DataUrl => result.data_url().into_bytes(),
        Emit::Raw => result.decoded_bytes()?,
    };

    match &cli.output {
        Some(path) => std::fs::write(path, &payload)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(&payload)
            .context("writing to stdout")?,
    }

    Ok(())
}
