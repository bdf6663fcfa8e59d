use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::source::types::ImageDimensions;

/// Upper bound on the RGBA surface the resampler will allocate.
const MAX_SURFACE_BYTES: u64 = 1 << 32;

/// Resamples `image` to `target` with a Lanczos3 filter.
///
/// Returns the input untouched when it already has the target size.
pub fn resample(image: DynamicImage, target: ImageDimensions) -> Result<DynamicImage> {
    if image.width() == target.width && image.height() == target.height {
        return Ok(image);
    }

    let surface_bytes = target.width as u64 * target.height as u64 * 4;
    if target.width == 0 || target.height == 0 || surface_bytes > MAX_SURFACE_BYTES {
        return Err(CompressionError::EncodeError(format!(
            "cannot create {}x{} surface",
            target.width, target.height
        )));
    }

    debug!(
        "Resampling {}x{} -> {}x{}",
        image.width(),
        image.height(),
        target.width,
        target.height
    );

    Ok(image.resize_exact(target.width, target.height, FilterType::Lanczos3))
}
