//! 8-bit RGB color type
//!
//! `Rgb` is the device-facing representation: the values written to an LED
//! driver or a display controller.

use std::fmt;

/// A color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use color_convert::Rgb;
    /// let orange = Rgb::from_bytes([255, 128, 0]);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Encode as six uppercase hex digits without a leading `#`.
    ///
    /// # Example
    /// ```
    /// use color_convert::Rgb;
    /// assert_eq!(Rgb::new(255, 0, 128).to_hex(), "FF0080");
    /// ```
    #[inline]
    pub fn to_hex(self) -> String {
        super::hex::rgb_to_hex(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bytes()
    }
}

impl fmt::Display for Rgb {
    /// Formats as the same six uppercase hex digits as [`Rgb::to_hex`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
