//! Byte-size helpers shared by the pipeline and its callers.
//!
//! None of these decode anything; they work on lengths alone so an upload
//! form can decide what to do before paying for a decode.

use crate::image_pipeline::source::types::SourceImage;

/// Default byte budget (1 MiB).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1_048_576;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Returns true when `file` is larger than `max_size_bytes`.
pub fn should_compress(file: &SourceImage, max_size_bytes: u64) -> bool {
    file.size > max_size_bytes
}

/// Pre-flight estimate of the base64 length for `byte_size` raw bytes.
pub fn estimate_base64_size(byte_size: u64) -> u64 {
    (byte_size as f64 * 1.33).ceil() as u64
}

/// Decoded-byte estimate for base64 text of `encoded_len` characters,
/// i.e. `ceil(encoded_len * 0.75)`.
pub fn encoded_byte_size(encoded_len: usize) -> u64 {
    (encoded_len as u64 * 3).div_ceil(4)
}

/// Human readable size: `0 Bytes`, `1 KB`, `1.5 KB`, `2.35 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log1024(bytes)) without float log rounding at exact powers
    let mut index = 0;
    let mut threshold = 1024_u64;
    while index < UNITS.len() - 1 && bytes >= threshold {
        index += 1;
        threshold = threshold.saturating_mul(1024);
    }
    let scaled = bytes as f64 / 1024_f64.powi(index as i32);

    let rendered = format!("{:.2}", scaled);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", rendered, UNITS[index])
}
