//! Source reader backed by the `image` crate.
//!
//! The container format is sniffed from the bytes; the declared MIME type is
//! never consulted here.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::source::reader::SourceReader;
use crate::image_pipeline::source::types::ImageDimensions;

/// Decodes any format the `image` crate was built with (JPEG, PNG, GIF,
/// WebP, BMP, TIFF, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateReader;

impl ImageCrateReader {
    fn guessed(data: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| CompressionError::DecodeError(e.to_string()))?;

        if reader.format().is_none() {
            return Err(CompressionError::DecodeError(
                "unrecognised image format".to_string(),
            ));
        }

        Ok(reader)
    }
}

impl SourceReader for ImageCrateReader {
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let reader = Self::guessed(data)?;
        let format = reader.format();
        let image = reader
            .decode()
            .map_err(|e| CompressionError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{}",
            format,
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Only the header is parsed; pixel data is never decoded.
    fn read_dimensions(&self, data: &[u8]) -> Result<ImageDimensions> {
        let (width, height) = Self::guessed(data)?
            .into_dimensions()
            .map_err(|e| CompressionError::DecodeError(e.to_string()))?;

        Ok(ImageDimensions::new(width, height))
    }
}
