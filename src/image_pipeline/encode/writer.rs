use std::io::Write;
use image::DynamicImage;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::encode::types::OutputFormat;

pub trait ImageWriter {
    /// Encodes `image` as `format` into `output`. `quality` is in (0, 1] and
    /// only affects formats where [`OutputFormat::uses_quality`] is true.
    fn write_image(
        &self,
        image: &DynamicImage,
        output: &mut dyn Write,
        format: OutputFormat,
        quality: f32,
    ) -> Result<()>;
}
