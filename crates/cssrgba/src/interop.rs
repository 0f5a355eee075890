//! Interoperability with foreign color representations.
//!
//! Browser drivers, image libraries, and GUI toolkits all have their own color
//! types, yet most of them boil down to four bytes. The [`Rgba8`] trait
//! captures just that, which suffices for [`Color::same_as_rgba8`]. For
//! platforms that pack the four bytes into one integer with alpha first,
//! [`PackedArgb`] provides conversions in both directions.

use crate::Color;

/// A color that decomposes into red, green, blue, and alpha bytes.
pub trait Rgba8 {
    /// Get the red, green, blue, and alpha bytes, in that order.
    fn to_rgba8(&self) -> [u8; 4];
}

impl Rgba8 for [u8; 4] {
    fn to_rgba8(&self) -> [u8; 4] {
        *self
    }
}

impl Rgba8 for Color {
    fn to_rgba8(&self) -> [u8; 4] {
        Color::to_rgba8(self)
    }
}

/// A color packed into a `u32` as `0xAARRGGBB`.
///
/// ```
/// # use cssrgba::Color;
/// # use cssrgba::interop::PackedArgb;
/// let coral = PackedArgb::from(Color::parse("coral")?);
/// assert_eq!(coral.value(), 0xffff_7f50);
/// assert_eq!(Color::from(PackedArgb::new(0x80ff_7f50)), Color::new(255, 127, 80, 0.5));
/// # Ok::<(), cssrgba::error::ColorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedArgb(u32);

impl PackedArgb {
    /// Create a new packed color from its integer value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a new packed color from its alpha, red, green, and blue bytes.
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// Get the integer value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the alpha, red, green, and blue bytes.
    pub const fn to_argb(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl Rgba8 for PackedArgb {
    fn to_rgba8(&self) -> [u8; 4] {
        let [a, r, g, b] = self.to_argb();
        [r, g, b, a]
    }
}

impl From<Color> for PackedArgb {
    fn from(value: Color) -> Self {
        let [r, g, b, a] = value.to_rgba8();
        Self::from_argb(a, r, g, b)
    }
}

impl From<PackedArgb> for Color {
    fn from(value: PackedArgb) -> Self {
        Color::from_rgba8(value.to_rgba8())
    }
}

#[cfg(test)]
mod test {
    use super::{PackedArgb, Rgba8};

    #[test]
    fn test_packed_argb() {
        let packed = PackedArgb::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(packed.value(), 0x1234_5678);
        assert_eq!(packed.to_argb(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(packed.to_rgba8(), [0x34, 0x56, 0x78, 0x12]);
        assert_eq!(PackedArgb::new(0x1234_5678), packed);
    }
}
