//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod error;
pub mod size;

pub use error::{CompressionError, Result};
pub use size::{
    DEFAULT_MAX_SIZE_BYTES, encoded_byte_size, estimate_base64_size, format_file_size,
    should_compress,
};
