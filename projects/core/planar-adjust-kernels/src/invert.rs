use crate::pixel_map::{check_output, map_samples};
use crate::KernelError;
use planar_adjust_common::sample::SAMPLE_MAX;
use planar_adjust_common::PlanarImage;

/// Replaces every sample `s` with `255 - s`.
///
/// Applying it twice returns the original image.
pub fn invert(input: &PlanarImage) -> PlanarImage {
    let mut output = PlanarImage::blank_like(input);
    map_samples(input, &mut output, invert_sample);
    output
}

/// Same as [`invert`], but writes into an existing image.
///
/// # Errors
///
/// [`KernelError::DimensionMismatch`] if `output` is not the same size as `input`.
pub fn invert_into(input: &PlanarImage, output: &mut PlanarImage) -> Result<(), KernelError> {
    check_output(input, output)?;
    map_samples(input, output, invert_sample);
    Ok(())
}

#[inline(always)]
fn invert_sample(sample: u8) -> u8 {
    SAMPLE_MAX - sample
}
