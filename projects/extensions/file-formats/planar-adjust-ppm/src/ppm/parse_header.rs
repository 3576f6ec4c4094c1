use super::constants::*;
use crate::{PpmError, PpmResult};
use core::fmt;
use log::debug;
use planar_adjust_common::image::checked_pixel_count;
use planar_adjust_common::channel::CHANNEL_COUNT;

/// Header token names, used in [`PpmError::MalformedHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Whitespace between two tokens.
    Separator,
    /// Image width in pixels.
    Width,
    /// Image height in pixels.
    Height,
    /// Maximum sample value.
    MaxValue,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeaderField::Separator => "separator",
            HeaderField::Width => "width",
            HeaderField::Height => "height",
            HeaderField::MaxValue => "max value",
        })
    }
}

/// Information extracted from a valid header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Width in pixels, never zero.
    pub width: u32,
    /// Height in pixels, never zero.
    pub height: u32,
    /// Maximum sample value; always 255 for accepted headers.
    pub max_value: u32,
    /// Offset of the first red sample.
    pub data_offset: usize,
}

impl PpmHeader {
    /// Bytes in a single plane (`width * height`).
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes of pixel data the header promises (three planes).
    #[inline]
    pub fn data_len(&self) -> usize {
        self.plane_len() * CHANNEL_COUNT
    }
}

/// Parses and validates the header at the start of `data`.
///
/// Accepts any Netpbm whitespace between tokens and `#` comments running to the end of
/// the line. Exactly one whitespace byte must follow the max value; pixel data starts
/// right after it.
///
/// # Errors
///
/// - [`PpmError::NotPlanarPpm`] if `data` does not start with `P6`.
/// - [`PpmError::MalformedHeader`] if a token is missing, non-numeric or overflows.
/// - [`PpmError::InvalidDimensions`] for a zero or unaddressable width/height.
/// - [`PpmError::UnsupportedMaxValue`] if the max value is not 255.
pub fn parse_ppm_header(data: &[u8]) -> PpmResult<PpmHeader> {
    if data.len() < PPM_MAGIC.len() || data[..PPM_MAGIC.len()] != PPM_MAGIC[..] {
        return Err(PpmError::NotPlanarPpm);
    }

    let mut reader = HeaderReader {
        data,
        pos: PPM_MAGIC.len(),
    };

    reader.skip_separator()?;
    let width = reader.read_decimal(HeaderField::Width)?;
    reader.skip_separator()?;
    let height = reader.read_decimal(HeaderField::Height)?;
    reader.skip_separator()?;
    let max_value = reader.read_decimal(HeaderField::MaxValue)?;
    reader.skip_single_whitespace()?;

    if checked_pixel_count(width, height).is_err() {
        return Err(PpmError::InvalidDimensions { width, height });
    }
    if max_value != PPM_MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    debug!(
        "Parsed header: {width}x{height}, max value {max_value}, data at offset {}",
        reader.pos
    );

    Ok(PpmHeader {
        width,
        height,
        max_value,
        data_offset: reader.pos,
    })
}

struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl HeaderReader<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Skips whitespace and comments; at least one byte must be consumed.
    fn skip_separator(&mut self) -> PpmResult<()> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if is_ppm_whitespace(byte) {
                self.pos += 1;
            } else if byte == PPM_COMMENT {
                while let Some(byte) = self.peek() {
                    self.pos += 1;
                    if byte == b'\n' || byte == b'\r' {
                        break;
                    }
                }
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(PpmError::MalformedHeader {
                field: HeaderField::Separator,
                offset: start,
            });
        }
        Ok(())
    }

    fn skip_single_whitespace(&mut self) -> PpmResult<()> {
        match self.peek() {
            Some(byte) if is_ppm_whitespace(byte) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(PpmError::MalformedHeader {
                field: HeaderField::Separator,
                offset: self.pos,
            }),
        }
    }

    fn read_decimal(&mut self, field: HeaderField) -> PpmResult<u32> {
        let start = self.pos;
        let mut value: u32 = 0;

        while let Some(byte) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(byte - b'0')))
                .ok_or(PpmError::MalformedHeader {
                    field,
                    offset: start,
                })?;
            self.pos += 1;
        }

        if self.pos == start {
            return Err(PpmError::MalformedHeader {
                field,
                offset: start,
            });
        }
        Ok(value)
    }
}
