use std::io::{Cursor, Write};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::encode::types::OutputFormat;
use crate::image_pipeline::encode::writer::ImageWriter;

pub struct StandardImageWriter;

/// Maps a (0, 1] quality onto the JPEG encoder's 1..=100 scale.
pub fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

impl ImageWriter for StandardImageWriter {
    fn write_image(
        &self,
        image: &DynamicImage,
        output: &mut dyn Write,
        format: OutputFormat,
        quality: f32,
    ) -> Result<()> {
        debug!(
            "Encoding {:?} image: {}x{} at quality {:.3}",
            format,
            image.width(),
            image.height(),
            quality
        );

        let mut buffer = Cursor::new(Vec::new());

        match format {
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel
                let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality));
                image
                    .to_rgb8()
                    .write_with_encoder(encoder)
                    .map_err(|e| CompressionError::EncodeError(e.to_string()))?;
            }
            OutputFormat::Png => {
                // PNG has no float sample type
                let written = match image.color() {
                    ColorType::Rgb32F => image.to_rgb8().write_to(&mut buffer, ImageFormat::Png),
                    ColorType::Rgba32F => image.to_rgba8().write_to(&mut buffer, ImageFormat::Png),
                    _ => image.write_to(&mut buffer, ImageFormat::Png),
                };
                written.map_err(|e| CompressionError::EncodeError(e.to_string()))?;
            }
            OutputFormat::WebP => {
                let encoder = WebPEncoder::new_lossless(&mut buffer);
                image
                    .to_rgba8()
                    .write_with_encoder(encoder)
                    .map_err(|e| CompressionError::EncodeError(e.to_string()))?;
            }
        }

        output.write_all(buffer.get_ref())?;

        debug!("Encoding complete, {} bytes", buffer.get_ref().len());
        Ok(())
    }
}
