//! HSV (hue, saturation, value) color type and conversions

use super::math::{hue_fraction, threeway_max, threeway_min, to_channel, unit};
use super::rgb::Rgb;

/// A color in HSV space.
///
/// All components are unit fractions: hue 0.0..1.0 covers the full
/// 0°..360° circle, saturation and value are 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value (brightness of the strongest channel)
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Convert an 8-bit RGB color to HSV.
///
/// Achromatic inputs (all channels equal) get hue 0. Black gets
/// saturation 0.
///
/// # Example
/// ```
/// use color_convert::{rgb_to_hsv, Rgb};
/// let hsv = rgb_to_hsv(Rgb::new(128, 128, 128));
/// assert_eq!(hsv.h, 0.0);
/// assert_eq!(hsv.s, 0.0);
/// assert!((hsv.v - 0.502).abs() < 1e-3);
/// ```
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let max = threeway_max(r, g, b);
    let min = threeway_min(r, g, b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_fraction(r, g, b, max, d)
    };

    Hsv { h, s, v: max }
}

/// Convert HSV to an 8-bit RGB color.
///
/// Channels are scaled by 255 and truncated. Components are not validated:
/// a hue outside 0.0..=1.0 still selects a sector (the sector index wraps
/// modulo 6) and channel values outside 0..=255 saturate. Use
/// [`try_hsv_to_rgb`](crate::strict::try_hsv_to_rgb) to reject such input.
///
/// # Example
/// ```
/// use color_convert::{hsv_to_rgb, Hsv, Rgb};
/// assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
/// ```
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;

    let scaled = h * 6.0;
    let i = scaled.trunc();
    let f = scaled - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        to_channel(r * 255.0),
        to_channel(g * 255.0),
        to_channel(b * 255.0),
    )
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(Rgb::new(255, 0, 0));
        assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));

        let green = rgb_to_hsv(Rgb::new(0, 255, 0));
        assert!((green.h - 1.0 / 3.0).abs() < EPS);
        assert_eq!(green.s, 1.0);

        let blue = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert!((blue.h - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_rgb_to_hsv_achromatic() {
        let grey = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!((grey.v - 128.0 / 255.0).abs() < EPS);

        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(Rgb::new(255, 255, 255)), Hsv::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_red_sector_wraps_below_blue() {
        // Magenta-ish red: g < b puts the hue near the top of the circle
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 51));
        assert!(hsv.h > 5.0 / 6.0 && hsv.h < 1.0, "hue {}", hsv.h);
    }

    #[test]
    fn test_hsv_to_rgb_sector_table() {
        let cases = [
            (0.0, Rgb::new(255, 0, 0)),
            (1.0 / 6.0, Rgb::new(255, 255, 0)),
            (0.5, Rgb::new(0, 255, 255)),
            (5.0 / 6.0, Rgb::new(255, 0, 255)),
        ];
        for (h, expected) in cases {
            let rgb = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
            for (got, want) in rgb.to_bytes().into_iter().zip(expected.to_bytes()) {
                assert!(
                    (i16::from(got) - i16::from(want)).abs() <= 1,
                    "hue {h}: got {rgb:?}, expected {expected:?}"
                );
            }
        }
    }

    #[test]
    fn test_hsv_to_rgb_truncates() {
        // 0.5 * 255 = 127.5 -> 127
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 0.5)), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_hsv_to_rgb_hue_one_wraps_to_red() {
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_to_rgb_out_of_range_does_not_panic() {
        let _ = hsv_to_rgb(Hsv::new(-0.25, 1.0, 1.0));
        let _ = hsv_to_rgb(Hsv::new(7.5, 2.0, -1.0));
        assert_eq!(
            hsv_to_rgb(Hsv::new(f64::NAN, f64::NAN, f64::NAN)),
            Rgb::new(0, 0, 0)
        );
        // Over-bright value saturates
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 2.0)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_from_impls_delegate() {
        let rgb = Rgb::new(12, 200, 99);
        assert_eq!(Hsv::from(rgb), rgb_to_hsv(rgb));
        let hsv = Hsv::new(0.4, 0.6, 0.8);
        assert_eq!(Rgb::from(hsv), hsv_to_rgb(hsv));
    }
}
