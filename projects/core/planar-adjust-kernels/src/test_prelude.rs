//! Common test imports and utilities for kernel tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{Adjustment, AdjustmentKind, KernelError};

// Common types from planar_adjust_common
pub use planar_adjust_common::{Channel, PlanarImage};

/// Builds an image whose planes hold distinct, recognisable ramps:
/// red counts up from 0, green from 0x40, blue from 0x80 (all wrapping).
pub(crate) fn ramp_image(width: u32, height: u32) -> PlanarImage {
    let len = width as usize * height as usize;
    let red = (0..len).map(|i| i as u8).collect();
    let green = (0..len).map(|i| (i as u8).wrapping_add(0x40)).collect();
    let blue = (0..len).map(|i| (i as u8).wrapping_add(0x80)).collect();
    PlanarImage::from_planes(width, height, red, green, blue).unwrap()
}

/// Builds a `width x 1` image from three explicit planes.
pub(crate) fn row_image(red: &[u8], green: &[u8], blue: &[u8]) -> PlanarImage {
    PlanarImage::from_planes(
        red.len() as u32,
        1,
        red.to_vec(),
        green.to_vec(),
        blue.to_vec(),
    )
    .unwrap()
}

/// The 2x1 image used throughout the kernel tests: both pixels are grey,
/// one dark (10) and one bright (200).
pub(crate) fn two_grey_pixels() -> PlanarImage {
    row_image(&[10, 200], &[10, 200], &[10, 200])
}
