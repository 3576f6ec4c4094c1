use super::parse_header::parse_ppm_header;
use crate::{PpmError, PpmResult};
use log::debug;
use planar_adjust_common::PlanarImage;

/// Decodes a complete planar `P6` file held in memory.
///
/// The header is validated and the amount of pixel data is checked before any plane is
/// allocated, so a failure never yields a partially populated image. Bytes past the blue
/// plane are ignored.
///
/// # Errors
///
/// Any error from [`parse_ppm_header`], or [`PpmError::IncompleteData`] if fewer than
/// `width * height * 3` bytes follow the header.
///
/// # Examples
///
/// ```
/// use planar_adjust_ppm::decode_ppm;
///
/// let image = decode_ppm(b"P6\n2 1\n255\n\x0a\xc8\x0a\xc8\x0a\xc8").unwrap();
/// assert_eq!((image.width(), image.height()), (2, 1));
/// assert_eq!(image.red(), &[10, 200]);
/// ```
pub fn decode_ppm(data: &[u8]) -> PpmResult<PlanarImage> {
    let header = parse_ppm_header(data)?;
    let pixels = &data[header.data_offset..];

    let expected = header.data_len();
    if pixels.len() < expected {
        return Err(PpmError::IncompleteData {
            expected,
            actual: pixels.len(),
        });
    }
    if pixels.len() > expected {
        debug!(
            "Ignoring {} trailing bytes after the blue plane",
            pixels.len() - expected
        );
    }

    let plane_len = header.plane_len();
    let (red, rest) = pixels.split_at(plane_len);
    let (green, rest) = rest.split_at(plane_len);
    let blue = &rest[..plane_len];

    Ok(PlanarImage::from_planes(
        header.width,
        header.height,
        red.to_vec(),
        green.to_vec(),
        blue.to_vec(),
    )?)
}
