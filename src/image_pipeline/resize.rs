//! Down-scaling module: fitting dimensions into bounds and resampling.

mod dimensions;
mod resampler;

pub use dimensions::fit_within;
pub use resampler::resample;
