//! Compression configuration types

use serde::Deserialize;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::common::size::DEFAULT_MAX_SIZE_BYTES;

/// Encodings the compressor can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy, the only format where quality matters
    Jpeg,
    /// Lossless, quality ignored
    Png,
    /// Lossless WebP, quality ignored
    WebP,
}

impl OutputFormat {
    /// Maps a declared MIME type to the format it is re-encoded as.
    ///
    /// Unsupported types fall back to PNG, matching what an HTML canvas does
    /// when asked for a type it cannot produce.
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Self::Jpeg,
            "image/webp" => Self::WebP,
            _ => Self::Png,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    pub fn is_jpeg(&self) -> bool {
        matches!(self, Self::Jpeg)
    }

    /// Whether the encoder output depends on quality. PNG and WebP are
    /// written losslessly, so every quality yields the same bytes.
    pub fn uses_quality(&self) -> bool {
        self.is_jpeg()
    }
}

/// Options for a single compression call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionOptions {
    /// Maximum output width in pixels
    pub max_width: u32,
    /// Maximum output height in pixels
    pub max_height: u32,
    /// Initial encoder quality in (0, 1]
    pub quality: f32,
    /// Byte budget the quality loop aims for
    pub max_size_bytes: u64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 800,
            quality: 0.8,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

impl CompressionOptions {
    pub fn builder() -> CompressionOptionsBuilder {
        CompressionOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(CompressionError::InvalidOptions(format!(
                "quality must be in (0, 1], got {}",
                self.quality
            )));
        }

        if self.max_width == 0 || self.max_height == 0 {
            return Err(CompressionError::InvalidOptions(format!(
                "bounds must be non-zero, got {}x{}",
                self.max_width, self.max_height
            )));
        }

        Ok(())
    }
}

/// Builder for CompressionOptions
#[derive(Default)]
pub struct CompressionOptionsBuilder {
    max_width: Option<u32>,
    max_height: Option<u32>,
    quality: Option<f32>,
    max_size_bytes: Option<u64>,
}

impl CompressionOptionsBuilder {
    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = Some(max_size_bytes);
        self
    }

    pub fn build(self) -> CompressionOptions {
        let default = CompressionOptions::default();
        CompressionOptions {
            max_width: self.max_width.unwrap_or(default.max_width),
            max_height: self.max_height.unwrap_or(default.max_height),
            quality: self.quality.unwrap_or(default.quality),
            max_size_bytes: self.max_size_bytes.unwrap_or(default.max_size_bytes),
        }
    }
}
