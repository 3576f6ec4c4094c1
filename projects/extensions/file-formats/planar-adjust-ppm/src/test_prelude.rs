//! Common test imports and utilities for planar-adjust-ppm tests
#![allow(unused_imports)]

pub use rstest::rstest;

pub use planar_adjust_common::PlanarImage;

pub use crate::{PpmError, PpmResult};

/// Builds a canonical file from explicit planes without going through the encoder.
pub(crate) fn build_ppm(width: u32, height: u32, red: &[u8], green: &[u8], blue: &[u8]) -> Vec<u8> {
    let mut data = format!("P6\n{width} {height}\n255\n").into_bytes();
    data.extend_from_slice(red);
    data.extend_from_slice(green);
    data.extend_from_slice(blue);
    data
}
