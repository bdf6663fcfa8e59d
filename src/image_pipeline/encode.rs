//! Image encoding module
//!
//! Re-encodes pixel buffers as JPEG, PNG or WebP, and holds the options that
//! drive the quality search.

mod writer;
mod standard_writer;
pub mod types;

pub use writer::ImageWriter;
pub use standard_writer::{StandardImageWriter, jpeg_quality};
pub use types::{CompressionOptions, CompressionOptionsBuilder, OutputFormat};
