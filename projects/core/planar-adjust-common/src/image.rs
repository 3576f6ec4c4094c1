use crate::channel::{Channel, CHANNEL_COUNT};
use crate::error::ImageError;
use alloc::vec;
use alloc::vec::Vec;

/// An RGB image stored as three separate 8-bit planes.
///
/// Each plane holds exactly `width * height` samples in row-major order, with
/// sample 0 being the top-left pixel. Every constructor enforces this, so code
/// holding a `PlanarImage` can index all three planes with the same index
/// without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarImage {
    width: u32,
    height: u32,
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

/// Validates the dimensions of an image and returns its pixel count.
///
/// Fails if either dimension is zero, or if the three planes together would
/// not fit in a `usize`.
pub fn checked_pixel_count(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimension { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .filter(|count| count.checked_mul(CHANNEL_COUNT).is_some())
        .ok_or(ImageError::DimensionsTooLarge { width, height })
}

impl PlanarImage {
    /// Creates a zero-filled (black) image.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        let len = checked_pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            red: vec![0; len],
            green: vec![0; len],
            blue: vec![0; len],
        })
    }

    /// Creates an image from three existing planes.
    ///
    /// # Errors
    ///
    /// - [`ImageError::ZeroDimension`] / [`ImageError::DimensionsTooLarge`] for bad dimensions
    /// - [`ImageError::PlaneLengthMismatch`] if any plane is not `width * height` long
    pub fn from_planes(
        width: u32,
        height: u32,
        red: Vec<u8>,
        green: Vec<u8>,
        blue: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = checked_pixel_count(width, height)?;
        let planes = [
            (Channel::Red, &red),
            (Channel::Green, &green),
            (Channel::Blue, &blue),
        ];
        for (channel, plane) in planes {
            if plane.len() != expected {
                return Err(ImageError::PlaneLengthMismatch {
                    channel,
                    expected,
                    actual: plane.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            red,
            green,
            blue,
        })
    }

    /// Creates a zero-filled image with the same dimensions as `other`.
    pub fn blank_like(other: &PlanarImage) -> Self {
        let len = other.pixel_count();
        Self {
            width: other.width,
            height: other.height,
            red: vec![0; len],
            green: vec![0; len],
            blue: vec![0; len],
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples in each plane (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.red.len()
    }

    /// Total number of samples across all planes.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * CHANNEL_COUNT
    }

    /// Returns `true` if `other` has the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &PlanarImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// The red plane.
    #[inline]
    pub fn red(&self) -> &[u8] {
        &self.red
    }

    /// The green plane.
    #[inline]
    pub fn green(&self) -> &[u8] {
        &self.green
    }

    /// The blue plane.
    #[inline]
    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    /// Borrows a single plane.
    #[inline]
    pub fn plane(&self, channel: Channel) -> &[u8] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Mutably borrows a single plane.
    ///
    /// The plane is handed out as a slice, so its length cannot change.
    #[inline]
    pub fn plane_mut(&mut self, channel: Channel) -> &mut [u8] {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Borrows all planes in file order (red, green, blue).
    #[inline]
    pub fn planes(&self) -> [&[u8]; CHANNEL_COUNT] {
        [&self.red, &self.green, &self.blue]
    }

    /// Mutably borrows all planes in file order (red, green, blue).
    #[inline]
    pub fn planes_mut(&mut self) -> [&mut [u8]; CHANNEL_COUNT] {
        [&mut self.red, &mut self.green, &mut self.blue]
    }

    /// Returns the `[r, g, b]` samples of the pixel at (`x`, `y`), or `None`
    /// if the coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNEL_COUNT]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = y as usize * self.width as usize + x as usize;
        Some([self.red[idx], self.green[idx], self.blue[idx]])
    }

    /// Consumes the image, returning its planes in file order.
    pub fn into_planes(self) -> [Vec<u8>; CHANNEL_COUNT] {
        [self.red, self.green, self.blue]
    }
}
