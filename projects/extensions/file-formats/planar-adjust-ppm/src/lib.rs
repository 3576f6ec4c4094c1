#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

/// Error types for decoding and encoding.
pub mod error;

/// The planar `P6` codec.
pub mod ppm;

/// Path based helpers: memory mapped reads and atomic writes.
#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

pub use error::{ErrorCategory, PpmError, PpmResult};
pub use ppm::*;
