#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Names of the three colour planes.
pub mod channel;

/// Errors raised when constructing images.
pub mod error;

/// The planar in-memory image.
pub mod image;

/// Conversions from intermediate arithmetic back to 8-bit samples.
pub mod sample;

#[cfg(test)]
pub mod test_prelude;

pub use channel::Channel;
pub use error::ImageError;
pub use image::PlanarImage;
