/// Magic bytes at offset 0 of every file.
pub const PPM_MAGIC: &[u8; 2] = b"P6";

/// The only maximum sample value accepted (8 bits per sample).
pub const PPM_MAX_VALUE: u32 = 255;

/// Smallest possible file: `"P6 1 1 255\n"` followed by one sample per plane.
pub const PPM_MIN_FILE_SIZE: usize = 11 + 3;

/// Whitespace as defined by the Netpbm formats.
#[inline(always)]
pub const fn is_ppm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Starts a comment running to the end of the line.
pub const PPM_COMMENT: u8 = b'#';
