use crate::ppm::parse_header::HeaderField;
use planar_adjust_common::ImageError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing planar `P6` images.
#[derive(Debug, Error)]
pub enum PpmError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The data does not start with the `P6` magic.
    #[error("Not a planar P6 image: missing 'P6' magic")]
    NotPlanarPpm,

    /// A header token is missing or is not a valid decimal number.
    #[error("Malformed header: invalid or missing {field} at byte {offset}")]
    MalformedHeader {
        /// Which token failed to parse.
        field: HeaderField,
        /// Byte offset where parsing stopped.
        offset: usize,
    },

    /// Only 8-bit samples (max value 255) are supported.
    #[error("Unsupported maximum sample value {0}, only 255 is supported")]
    UnsupportedMaxValue(u32),

    /// Width or height is zero, or the image is too large to address.
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// Fewer pixel bytes follow the header than the dimensions require.
    #[error("Incomplete pixel data: expected {expected} bytes, found {actual}")]
    IncompleteData {
        /// Bytes required by the header (`width * height * 3`).
        expected: usize,
        /// Bytes actually present after the header.
        actual: usize,
    },

    /// The decoded planes could not form an image.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Coarse classification of [`PpmError`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The file could not be opened, read, created or written.
    Io,
    /// The bytes are not a valid planar `P6` image.
    Format,
    /// The header is valid but the pixel data is short.
    IncompleteData,
}

impl PpmError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PpmError::Io(_) => ErrorCategory::Io,
            PpmError::IncompleteData { .. } => ErrorCategory::IncompleteData,
            PpmError::NotPlanarPpm
            | PpmError::MalformedHeader { .. }
            | PpmError::UnsupportedMaxValue(_)
            | PpmError::InvalidDimensions { .. }
            | PpmError::Image(_) => ErrorCategory::Format,
        }
    }
}

/// Result type for codec operations.
pub type PpmResult<T> = Result<T, PpmError>;
