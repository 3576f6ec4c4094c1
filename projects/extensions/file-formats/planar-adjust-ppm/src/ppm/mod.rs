/// Shared constants between modules.
pub mod constants;

/// Quick check for the `P6` magic.
pub mod likely_ppm;

/// Header tokenizer and validation.
pub mod parse_header;

/// Bytes to [`PlanarImage`](planar_adjust_common::PlanarImage).
pub mod decode;

/// [`PlanarImage`](planar_adjust_common::PlanarImage) to bytes.
pub mod encode;

pub use decode::*;
pub use encode::*;
pub use likely_ppm::*;
pub use parse_header::*;
