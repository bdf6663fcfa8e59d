//! Source image types

use std::path::Path;

use crate::image_pipeline::common::error::{CompressionError, Result};

/// MIME type used when the extension says nothing useful.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// An image handed to the compressor, exactly as the upload form received it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Original file name, carried through to the result
    pub file_name: String,
    /// Declared MIME type (e.g. `image/jpeg`)
    pub content_type: String,
    /// Length of `data` in bytes
    pub size: u64,
    /// Encoded image bytes
    pub data: Vec<u8>,
}

impl SourceImage {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size: data.len() as u64,
            data,
        }
    }

    /// Reads `path` from disk and guesses the MIME type from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = std::fs::read(path).map_err(|e| {
            CompressionError::InputReadError(format!("{}: {}", path.display(), e))
        })?;

        let content_type = image::ImageFormat::from_path(path)
            .map(|format| format.to_mime_type())
            .unwrap_or(UNKNOWN_CONTENT_TYPE);

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(file_name, content_type, data))
    }
}

/// Natural pixel dimensions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn fits_within(&self, max_width: u32, max_height: u32) -> bool {
        self.width <= max_width && self.height <= max_height
    }
}
