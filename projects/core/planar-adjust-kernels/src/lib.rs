#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

/// Runtime selection of a single kernel and its parameter.
pub mod adjustment;

/// Brightness shift.
pub mod brighten;

/// Contrast adjustment around mid-grey.
pub mod contrast;

/// Errors returned by the kernels.
pub mod error;

/// Colour inversion.
pub mod invert;

/// Saturation scaling.
pub mod saturate;

mod pixel_map;

/// Internals re-exported for benchmarks.
#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub mod test_prelude;

pub use adjustment::{Adjustment, AdjustmentKind};
pub use brighten::{brighten, brighten_into};
pub use contrast::{adjust_contrast, adjust_contrast_into};
pub use error::KernelError;
pub use invert::{invert, invert_into};
pub use saturate::{saturate, saturate_into};
