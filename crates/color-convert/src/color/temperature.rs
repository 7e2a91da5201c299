//! Color temperature to RGB
//!
//! Uses Tanner Helland's curve fit of the blackbody locus. The fit is
//! published for 1000 K..=40000 K and is an approximation, not a physical
//! computation. Only hundreds of kelvin are significant: the input is
//! integer-divided by 100 before evaluation.

use super::math::to_channel;
use super::rgb::Rgb;

/// Lowest temperature the curve fit was made for.
pub const MIN_KELVIN: i32 = 1000;

/// Highest temperature the curve fit was made for.
pub const MAX_KELVIN: i32 = 40000;

/// Convert a color temperature in kelvin to an approximate RGB color.
///
/// Every channel is clamped to 0..=255 before truncation. Temperatures below
/// 100 K evaluate `ln(0)` or the logarithm of a negative number; the
/// resulting non-finite green channel becomes 0.
///
/// # Example
/// ```
/// use color_convert::temperature_to_rgb;
/// let daylight = temperature_to_rgb(6600);
/// assert_eq!((daylight.r, daylight.g), (255, 255));
///
/// let candle = temperature_to_rgb(1000);
/// assert!(candle.r > candle.b);
/// ```
pub fn temperature_to_rgb(kelvin: i32) -> Rgb {
    // Integer division truncates toward zero
    let temp = kelvin / 100;

    if temp <= 66 {
        let t = f64::from(temp);
        let green = 99.470_802_586_1 * t.ln() - 161.119_568_166_1;
        let blue = if temp <= 19 {
            0.0
        } else {
            138.517_731_223_1 * (t - 10.0).ln() - 305.044_792_730_7
        };
        Rgb::new(255, to_channel(green), to_channel(blue))
    } else {
        let t = f64::from(temp - 60);
        let red = 329.698_727_446 * t.powf(-0.133_204_759_2);
        let green = 288.122_169_528_3 * t.powf(-0.075_514_849_2);
        Rgb::new(to_channel(red), to_channel(green), 255)
    }
}
