use super::constants::*;

/// Determines if the given data likely represents a planar `P6` image.
/// This only checks the `P6` magic, the byte after it and a minimum size.
/// For full header validation, use [`parse_ppm_header`].
///
/// [`parse_ppm_header`]: crate::ppm::parse_header::parse_ppm_header
#[inline(always)]
pub fn likely_ppm(data: &[u8]) -> bool {
    data.len() >= PPM_MIN_FILE_SIZE
        && data[..2] == PPM_MAGIC[..]
        && (is_ppm_whitespace(data[2]) || data[2] == PPM_COMMENT)
}
