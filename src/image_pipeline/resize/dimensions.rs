use crate::image_pipeline::source::types::ImageDimensions;

/// Largest dimensions that fit inside `max_width`×`max_height` while keeping
/// the source aspect ratio. Sources that already fit are returned unchanged,
/// so images are never enlarged.
pub fn fit_within(source: ImageDimensions, max_width: u32, max_height: u32) -> ImageDimensions {
    if source.fits_within(max_width, max_height) {
        return source;
    }

    let scale_w = max_width as f64 / source.width as f64;
    let scale_h = max_height as f64 / source.height as f64;
    let scale = scale_w.min(scale_h);

    // Both products are <= their bound since scale <= bound / side
    let width = ((source.width as f64 * scale).round() as u32).clamp(1, max_width);
    let height = ((source.height as f64 * scale).round() as u32).clamp(1, max_height);

    ImageDimensions::new(width, height)
}
