//! HSL (hue, saturation, lightness) color type and conversions

use super::math::{hue_fraction, hue_to_channel, threeway_max, threeway_min, to_channel, unit};
use super::rgb::Rgb;

/// A color in HSL space.
///
/// Same hue convention as [`Hsv`](super::Hsv): a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness (midpoint of the strongest and weakest channel)
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Convert an 8-bit RGB color to HSL.
///
/// # Example
/// ```
/// use color_convert::{rgb_to_hsl, Rgb};
/// let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let max = threeway_max(r, g, b);
    let min = threeway_min(r, g, b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl {
        h: hue_fraction(r, g, b, max, d),
        s,
        l,
    }
}

/// Convert HSL to an 8-bit RGB color.
///
/// A saturation of exactly 0.0 is treated as grey regardless of hue.
/// Channels are scaled by 255 and truncated, so `l = 0.5` gives 127.
/// Hue is expected in 0.0..=1.0; the per-channel offsets of ±1/3 are
/// wrapped by a single step only.
///
/// # Example
/// ```
/// use color_convert::{hsl_to_rgb, Hsl, Rgb};
/// assert_eq!(hsl_to_rgb(Hsl::new(0.7, 0.0, 0.5)), Rgb::new(127, 127, 127));
/// ```
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(
        to_channel(r * 255.0),
        to_channel(g * 255.0),
        to_channel(b * 255.0),
    )
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}
