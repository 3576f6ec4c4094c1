use crate::pixel_map::{check_output, map_pixels};
use crate::KernelError;
use planar_adjust_common::channel::CHANNEL_COUNT;
use planar_adjust_common::sample::saturate_f32;
use planar_adjust_common::PlanarImage;

/// Scales each pixel's distance from its own grey level by `factor`.
///
/// For a pixel with channel mean `avg = (r + g + b) / 3`, every channel `c`
/// becomes `avg + (c - avg) * factor`, clamped to `[0, 255]` and truncated.
///
/// - `factor > 1` pushes channels apart (more saturated)
/// - `factor` in `[0, 1)` pulls them toward grey
/// - `factor == 0` yields the truncated mean in every channel
/// - `factor == 1` returns the input unchanged
///
/// Results below zero are clamped to 0, same as results above 255.
pub fn saturate(input: &PlanarImage, factor: f32) -> PlanarImage {
    let mut output = PlanarImage::blank_like(input);
    map_pixels(input, &mut output, |pixel| saturate_pixel(pixel, factor));
    output
}

/// Same as [`saturate`], but writes into an existing image.
///
/// # Errors
///
/// [`KernelError::DimensionMismatch`] if `output` is not the same size as `input`.
pub fn saturate_into(
    input: &PlanarImage,
    output: &mut PlanarImage,
    factor: f32,
) -> Result<(), KernelError> {
    check_output(input, output)?;
    map_pixels(input, output, |pixel| saturate_pixel(pixel, factor));
    Ok(())
}

/// Saturation rule for a single `[r, g, b]` pixel.
#[inline(always)]
pub fn saturate_pixel(pixel: [u8; CHANNEL_COUNT], factor: f32) -> [u8; CHANNEL_COUNT] {
    let [r, g, b] = pixel.map(|c| c as f32);
    let avg = (r + g + b) / 3.0;

    // avg + (c - avg) * factor, arranged so factor 1 and factor 0 are exact.
    let keep = 1.0 - factor;
    [r, g, b].map(|c| saturate_f32(c * factor + avg * keep))
}
