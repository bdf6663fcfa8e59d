//! Free-function entry points for callers that do not need a reusable
//! pipeline. Each call builds its own stateless pipeline.

use crate::image_pipeline::{
    common::error::{CompressionError, Result},
    conversions::compress::CompressionPipeline,
    conversions::types::CompressedImage,
    encode::CompressionOptions,
    source::{ImageCrateReader, ImageDimensions, SourceImage, SourceReader},
};

pub fn compress_image(file: &SourceImage, options: &CompressionOptions) -> Result<CompressedImage> {
    CompressionPipeline::new(options.clone()).compress(file)
}

/// Runs [`compress_image`] on tokio's blocking pool.
///
/// Resolves exactly once. Dropping the future does not stop work that has
/// already started.
pub async fn compress_image_async(
    file: SourceImage,
    options: CompressionOptions,
) -> Result<CompressedImage> {
    tokio::task::spawn_blocking(move || compress_image(&file, &options))
        .await
        .map_err(|e| CompressionError::TaskFailed(e.to_string()))?
}

pub fn get_image_dimensions(file: &SourceImage) -> Result<ImageDimensions> {
    ImageCrateReader.read_dimensions(&file.data)
}
