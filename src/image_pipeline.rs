//! Image processing pipeline module
//!
//! This module shrinks uploaded images to a byte budget, with separate
//! modules for decoding, resizing, encoding and the compression orchestration.

pub mod source;
pub mod resize;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    CompressionError,
    Result,
    DEFAULT_MAX_SIZE_BYTES,
    estimate_base64_size,
    format_file_size,
    should_compress,
};

pub use source::{
    ImageCrateReader,
    ImageDimensions,
    SourceImage,
    SourceReader,
};

pub use resize::{
    fit_within,
    resample,
};

pub use encode::{
    CompressionOptions,
    CompressionOptionsBuilder,
    ImageWriter,
    OutputFormat,
    StandardImageWriter,
};

pub use conversions::{
    CompressedImage,
    CompressionPipeline,
    PipelineTimings,
    compress_image,
    compress_image_async,
    get_image_dimensions,
};
