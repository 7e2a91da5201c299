//! Validated conversions
//!
//! The functions at the crate root accept anything and always produce
//! *some* color. The `try_` variants here check their inputs first and
//! return [`ConversionError::InvalidArgument`] instead of guessing.
//! On valid input both paths return identical results.

use crate::color::{
    hsl_to_rgb, hsv_to_rgb, parse_hex, temperature_to_rgb, Hsl, Hsv, Rgb, MAX_KELVIN, MIN_KELVIN,
};
use crate::error::ConversionError;

const UNIT_RANGE: &str = "a finite value in 0.0..=1.0";
const KELVIN_RANGE: &str = "a temperature in 1000..=40000 K";

fn check_unit(name: &'static str, value: f64) -> Result<(), ConversionError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConversionError::invalid(name, value, UNIT_RANGE))
    }
}

impl Hsv {
    /// Check that every component is finite and within 0.0..=1.0.
    pub fn validate(&self) -> Result<(), ConversionError> {
        check_unit("hue", self.h)?;
        check_unit("saturation", self.s)?;
        check_unit("value", self.v)
    }
}

impl Hsl {
    /// Check that every component is finite and within 0.0..=1.0.
    pub fn validate(&self) -> Result<(), ConversionError> {
        check_unit("hue", self.h)?;
        check_unit("saturation", self.s)?;
        check_unit("lightness", self.l)
    }
}

/// [`hsv_to_rgb`] after [`Hsv::validate`].
pub fn try_hsv_to_rgb(hsv: Hsv) -> Result<Rgb, ConversionError> {
    hsv.validate()?;
    Ok(hsv_to_rgb(hsv))
}

/// [`hsl_to_rgb`] after [`Hsl::validate`].
pub fn try_hsl_to_rgb(hsl: Hsl) -> Result<Rgb, ConversionError> {
    hsl.validate()?;
    Ok(hsl_to_rgb(hsl))
}

/// [`temperature_to_rgb`] restricted to the range the curve fit covers.
///
/// # Example
/// ```
/// use color_convert::strict::try_temperature_to_rgb;
/// assert!(try_temperature_to_rgb(6500).is_ok());
/// assert!(try_temperature_to_rgb(500).is_err());
/// ```
pub fn try_temperature_to_rgb(kelvin: i32) -> Result<Rgb, ConversionError> {
    if !(MIN_KELVIN..=MAX_KELVIN).contains(&kelvin) {
        return Err(ConversionError::invalid("kelvin", kelvin, KELVIN_RANGE));
    }
    Ok(temperature_to_rgb(kelvin))
}

/// Strict hex decoding with the error lifted into [`ConversionError`].
///
/// See [`Rgb`]'s `FromStr` impl for the accepted formats.
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb, ConversionError> {
    Ok(parse_hex(hex)?)
}
