//! Internals exposed for benchmarking the pixel mapping layer in isolation.

pub use crate::pixel_map::{map_pixels, map_samples, CHUNK_SIZE};
