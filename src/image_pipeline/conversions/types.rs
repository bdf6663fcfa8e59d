//! Compression result types

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::common::size::encoded_byte_size;
use crate::image_pipeline::source::types::{ImageDimensions, SourceImage};

/// Outcome of a compression call, ready to hand to the upload flow.
///
/// `compressed_size` is the decoded-byte estimate of `data`
/// (`ceil(len * 0.75)`), the same figure the quality loop compared against the
/// byte budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedImage {
    /// Base64 payload without a data URL prefix
    pub data: String,
    pub file_name: String,
    /// Type of the encoded payload, which differs from the source type after
    /// a JPEG fallback
    pub content_type: String,
    pub compressed_size: u64,
    pub original_size: u64,
    /// `original_size / compressed_size`
    pub compression_ratio: f64,
    pub width: u32,
    pub height: u32,
    /// Quality of the returned encoding
    pub quality: f32,
    /// Encodes made by the quality loop, fallback excluded
    pub attempts: u32,
    /// True when the loop gave up and a fixed-quality JPEG was returned
    pub used_fallback: bool,
}

impl CompressedImage {
    /// Wraps `source` unchanged, for uploads already under budget.
    pub fn passthrough(source: &SourceImage, dimensions: ImageDimensions) -> Self {
        let data = STANDARD.encode(&source.data);
        let compressed_size = encoded_byte_size(data.len());
        Self {
            data,
            file_name: source.file_name.clone(),
            content_type: source.content_type.clone(),
            compressed_size,
            original_size: source.size,
            compression_ratio: compression_ratio(source.size, compressed_size),
            width: dimensions.width,
            height: dimensions.height,
            quality: 1.0,
            attempts: 0,
            used_fallback: false,
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.data)
    }

    pub fn decoded_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| CompressionError::DecodeError(e.to_string()))
    }

    pub fn within_budget(&self, max_size_bytes: u64) -> bool {
        self.compressed_size <= max_size_bytes
    }
}

pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    original_size as f64 / compressed_size as f64
}
