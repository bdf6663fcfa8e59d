use image::DynamicImage;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::types::ImageDimensions;

pub trait SourceReader {
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage>;
    fn read_dimensions(&self, data: &[u8]) -> Result<ImageDimensions>;
}
