use crate::pixel_map::{check_output, map_samples};
use crate::KernelError;
use planar_adjust_common::sample::{saturate_f32, SAMPLE_MIDPOINT};
use planar_adjust_common::PlanarImage;

/// Scales every sample's distance from mid-grey (128) by `factor`.
///
/// Each sample becomes `(s - 128) * factor + 128`, clamped to `[0, 255]` and
/// truncated. `factor == 1` is the identity and `factor == 0` produces a flat
/// image where every sample is 128.
///
/// # Examples
///
/// ```
/// use planar_adjust_common::PlanarImage;
/// use planar_adjust_kernels::adjust_contrast;
///
/// let image = PlanarImage::from_planes(2, 1, vec![10, 200], vec![10, 200], vec![10, 200]).unwrap();
/// let punchy = adjust_contrast(&image, 2.0);
/// assert_eq!(punchy.red(), &[0, 255]);
/// ```
pub fn adjust_contrast(input: &PlanarImage, factor: f32) -> PlanarImage {
    let mut output = PlanarImage::blank_like(input);
    map_samples(input, &mut output, |sample| contrast_sample(sample, factor));
    output
}

/// Same as [`adjust_contrast`], but writes into an existing image.
///
/// # Errors
///
/// [`KernelError::DimensionMismatch`] if `output` is not the same size as `input`.
pub fn adjust_contrast_into(
    input: &PlanarImage,
    output: &mut PlanarImage,
    factor: f32,
) -> Result<(), KernelError> {
    check_output(input, output)?;
    map_samples(input, output, |sample| contrast_sample(sample, factor));
    Ok(())
}

/// Contrast rule for a single sample.
#[inline(always)]
pub fn contrast_sample(sample: u8, factor: f32) -> u8 {
    saturate_f32((sample as f32 - SAMPLE_MIDPOINT) * factor + SAMPLE_MIDPOINT)
}
