use core::fmt;
use derive_enum_all_values::AllValues;

/// Number of colour planes stored by a [`PlanarImage`](crate::PlanarImage).
pub const CHANNEL_COUNT: usize = 3;

/// A single colour plane of a [`PlanarImage`](crate::PlanarImage).
///
/// Variants are declared in the order the planes are stored on disk, so
/// `Channel::all_values()` can be used to walk planes in file order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum Channel {
    /// First plane in the file.
    Red = 0,
    /// Second plane in the file.
    Green = 1,
    /// Third plane in the file.
    Blue = 2,
}

impl Channel {
    /// Index of this plane within the image and the file.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name of the plane.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
