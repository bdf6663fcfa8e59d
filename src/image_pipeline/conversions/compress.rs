use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::DynamicImage;
use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    common::{error::Result, size::encoded_byte_size},
    conversions::timing::PipelineTimings,
    conversions::types::{CompressedImage, compression_ratio},
    encode::{CompressionOptions, ImageWriter, OutputFormat, StandardImageWriter},
    resize::{fit_within, resample},
    source::{ImageCrateReader, ImageDimensions, SourceImage, SourceReader},
};

/// Quality the loop will not go below.
pub const MIN_QUALITY: f32 = 0.1;
/// Factor applied to quality after each over-budget attempt.
pub const QUALITY_STEP: f32 = 0.85;
/// Encodes the quality loop may make before falling back.
pub const MAX_ATTEMPTS: u32 = 8;
/// Fallback quality when the output was already JPEG.
pub const JPEG_FALLBACK_QUALITY: f32 = 0.3;
/// Fallback quality when switching a non-JPEG output to JPEG.
pub const CONVERT_FALLBACK_QUALITY: f32 = 0.7;

pub struct CompressionPipeline<R: SourceReader, W: ImageWriter> {
    reader: R,
    writer: W,
    options: CompressionOptions,
}

impl CompressionPipeline<ImageCrateReader, StandardImageWriter> {
    pub fn new(options: CompressionOptions) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardImageWriter,
            options,
        }
    }
}

impl<R: SourceReader, W: ImageWriter> CompressionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, options: CompressionOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Down-scales and re-encodes `source` until it fits the byte budget.
    ///
    /// The result can still exceed the budget when quality bottoms out or the
    /// fixed-quality JPEG fallback is used; check `used_fallback` or
    /// [`CompressedImage::within_budget`] if that matters to the caller.
    #[instrument(skip(self, source), fields(file = %source.file_name, input_size = source.size))]
    pub fn compress(&self, source: &SourceImage) -> Result<CompressedImage> {
        let mut timings = PipelineTimings::new();
        self.run(source, &mut timings)
    }

    #[instrument(skip(self, source), fields(file = %source.file_name, input_size = source.size))]
    pub fn compress_with_timings(
        &self,
        source: &SourceImage,
    ) -> Result<(CompressedImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let result = self.run(source, &mut timings)?;
        Ok((result, timings))
    }

    #[instrument(skip(self, input_path))]
    pub fn compress_file<P: AsRef<Path>>(&self, input_path: P) -> Result<CompressedImage> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Compressing file");

        let source = {
            let _span = tracing::info_span!("read_input_file").entered();
            SourceImage::from_path(input_path)?
        };

        self.compress(&source)
    }

    pub fn dimensions(&self, source: &SourceImage) -> Result<ImageDimensions> {
        self.reader.read_dimensions(&source.data)
    }

    pub fn options(&self) -> &CompressionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CompressionOptions) {
        self.options = options;
    }

    fn run(
        &self,
        source: &SourceImage,
        timings: &mut PipelineTimings,
    ) -> Result<CompressedImage> {
        self.options.validate()?;
        info!("Starting image compression");

        let image = {
            let _span = tracing::info_span!("decode").entered();
            timings.measure("decode", || self.reader.read_image(&source.data))?
        };

        let source_dims = ImageDimensions::new(image.width(), image.height());
        let target = fit_within(source_dims, self.options.max_width, self.options.max_height);

        let image = {
            let _span = tracing::info_span!("resize",
                from_width = source_dims.width,
                from_height = source_dims.height,
                width = target.width,
                height = target.height
            ).entered();
            timings.measure("resize", || resample(image, target))?
        };

        let format = OutputFormat::from_content_type(&source.content_type);
        let max_size = self.options.max_size_bytes;
        let mut quality = self.options.quality;
        let mut attempts = 0;
        let mut previous: Option<String> = None;

        let (data, format, quality, used_fallback) = loop {
            attempts += 1;
            let data = match previous.take() {
                // lossless output is identical at every quality
                Some(data) if !format.uses_quality() => data,
                _ => {
                    let _span = tracing::info_span!("encode", attempt = attempts).entered();
                    timings.measure(format!("encode_attempt_{attempts}"), || {
                        self.encode(&image, format, quality)
                    })?
                }
            };

            let size = encoded_byte_size(data.len());
            debug!(attempt = attempts, quality, size, max_size, "Encode attempt");

            if size <= max_size || quality <= MIN_QUALITY {
                break (data, format, quality, false);
            }

            if attempts >= MAX_ATTEMPTS {
                let fallback_quality = if format.is_jpeg() {
                    JPEG_FALLBACK_QUALITY
                } else {
                    CONVERT_FALLBACK_QUALITY
                };
                warn!(
                    size,
                    max_size,
                    quality = fallback_quality,
                    "Byte budget not met, falling back to JPEG"
                );

                let _span = tracing::info_span!("encode_fallback").entered();
                let data = timings.measure("encode_fallback", || {
                    self.encode(&image, OutputFormat::Jpeg, fallback_quality)
                })?;
                break (data, OutputFormat::Jpeg, fallback_quality, true);
            }

            previous = Some(data);
            quality *= QUALITY_STEP;
        };

        let compressed_size = encoded_byte_size(data.len());
        let result = CompressedImage {
            data,
            file_name: source.file_name.clone(),
            content_type: format.content_type().to_string(),
            compressed_size,
            original_size: source.size,
            compression_ratio: compression_ratio(source.size, compressed_size),
            width: target.width,
            height: target.height,
            quality,
            attempts,
            used_fallback,
        };

        info!(
            width = result.width,
            height = result.height,
            original_size = result.original_size,
            compressed_size = result.compressed_size,
            attempts = result.attempts,
            "Compression complete"
        );
        Ok(result)
    }

    /// One encode, returned as base64 text.
    fn encode(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        quality: f32,
    ) -> Result<String> {
        let mut buffer = Vec::new();
        self.writer.write_image(image, &mut buffer, format, quality)?;
        Ok(STANDARD.encode(&buffer))
    }
}
