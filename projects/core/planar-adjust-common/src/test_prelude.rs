//! Common test imports and utilities for planar-adjust-common tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::{Channel, ImageError, PlanarImage};

/// Builds an image whose planes hold distinct, recognisable ramps:
/// red counts up from 0, green from 0x40, blue from 0x80 (all wrapping).
pub(crate) fn ramp_image(width: u32, height: u32) -> PlanarImage {
    let len = width as usize * height as usize;
    let red = (0..len).map(|i| i as u8).collect();
    let green = (0..len).map(|i| (i as u8).wrapping_add(0x40)).collect();
    let blue = (0..len).map(|i| (i as u8).wrapping_add(0x80)).collect();
    PlanarImage::from_planes(width, height, red, green, blue).unwrap()
}
