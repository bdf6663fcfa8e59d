//! Pipeline conversions module
//!
//! This module contains the orchestration logic for compressing uploads:
//! decode, fit, resample, then the quality search.

mod compress;
mod one_shot;
mod timing;
pub mod types;


pub use compress::{
    CONVERT_FALLBACK_QUALITY, CompressionPipeline, JPEG_FALLBACK_QUALITY, MAX_ATTEMPTS,
    MIN_QUALITY, QUALITY_STEP,
};
pub use one_shot::{compress_image, compress_image_async, get_image_dimensions};
pub use timing::{PipelineTimings, StepTiming};
pub use types::CompressedImage;
