//! Source image reading module
//!
//! Decoding of uploaded images and header-only dimension probing.

mod reader;
mod image_crate_reader;
pub mod types;

pub use reader::SourceReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::{ImageDimensions, SourceImage};
