use crate::pixel_map::{check_output, map_samples};
use crate::KernelError;
use planar_adjust_common::sample::saturate_i32;
use planar_adjust_common::PlanarImage;

/// Shifts every sample of every channel by `delta`, saturating at 0 and 255.
///
/// A negative `delta` darkens the image. Any `i32` is accepted.
///
/// # Examples
///
/// ```
/// use planar_adjust_common::PlanarImage;
/// use planar_adjust_kernels::brighten;
///
/// let image = PlanarImage::from_planes(2, 1, vec![10, 200], vec![10, 200], vec![10, 200]).unwrap();
/// let brighter = brighten(&image, 100);
/// assert_eq!(brighter.red(), &[110, 255]);
/// ```
pub fn brighten(input: &PlanarImage, delta: i32) -> PlanarImage {
    let mut output = PlanarImage::blank_like(input);
    map_samples(input, &mut output, |sample| brighten_sample(sample, delta));
    output
}

/// Same as [`brighten`], but writes into an existing image.
///
/// # Errors
///
/// [`KernelError::DimensionMismatch`] if `output` is not the same size as `input`.
pub fn brighten_into(
    input: &PlanarImage,
    output: &mut PlanarImage,
    delta: i32,
) -> Result<(), KernelError> {
    check_output(input, output)?;
    map_samples(input, output, |sample| brighten_sample(sample, delta));
    Ok(())
}

/// Brightness rule for a single sample.
#[inline(always)]
pub fn brighten_sample(sample: u8, delta: i32) -> u8 {
    saturate_i32((sample as i32).saturating_add(delta))
}
