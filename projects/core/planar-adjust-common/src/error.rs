use crate::Channel;
use thiserror::Error;

/// Errors raised when an image would violate the plane length invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Width or height is zero.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The three planes together would not fit in addressable memory.
    #[error("Image dimensions {width}x{height} are too large")]
    DimensionsTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A plane does not hold exactly `width * height` samples.
    #[error("{channel} plane has {actual} samples, expected {expected}")]
    PlaneLengthMismatch {
        /// The offending plane.
        channel: Channel,
        /// `width * height`.
        expected: usize,
        /// Length of the supplied plane.
        actual: usize,
    },
}
