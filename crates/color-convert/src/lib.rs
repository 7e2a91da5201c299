//! color-convert: single-pixel color conversions for LED and display drivers
//!
//! This library translates between human-friendly color descriptions and the
//! 8-bit RGB triples a device actually consumes. Every function converts one
//! color per call, holds no state, and never allocates except to build a hex
//! string.
//!
//! # Quick Start
//!
//! ```
//! use color_convert::{hsv_to_rgb, rgb_to_hex, temperature_to_rgb, Hsv, Rgb};
//!
//! // Pure red at full brightness
//! let red = hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0));
//! assert_eq!(red, Rgb::new(255, 0, 0));
//! assert_eq!(rgb_to_hex(red), "FF0000");
//!
//! // Warm white for an RGB strip
//! let warm = temperature_to_rgb(2700);
//! assert!(warm.r > warm.b);
//! ```
//!
//! # Conversions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | [`Rgb`] | [`Hsv`] | [`rgb_to_hsv`] |
//! | [`Rgb`] | [`Hsl`] | [`rgb_to_hsl`] |
//! | [`Hsv`] | [`Rgb`] | [`hsv_to_rgb`] |
//! | [`Hsl`] | [`Rgb`] | [`hsl_to_rgb`] |
//! | kelvin (`i32`) | [`Rgb`] | [`temperature_to_rgb`] |
//! | hex `&str` | [`Rgb`] | [`hex_to_rgb`] |
//! | [`Rgb`] | hex `String` | [`rgb_to_hex`] |
//!
//! # Numeric Conventions
//!
//! Hue, saturation, value and lightness are unit fractions in 0.0..=1.0.
//! A hue of 0.5 is 180°.
//!
//! Converting back to 8-bit channels multiplies by 255 and **truncates**.
//! `0.5` becomes `127`, not `128`. As a consequence an RGB → HSV → RGB round
//! trip can lose one step per channel.
//!
//! Branches on achromatic colors use exact floating point comparison
//! (`max == min`, `saturation == 0.0`). Nearly grey colors keep their hue.
//!
//! # Permissive and Strict Paths
//!
//! The root functions never fail. Out-of-range components produce clamped
//! or wrapped output, and [`hex_to_rgb`] reads the leading hex number and
//! ignores whatever follows it.
//!
//! The [`strict`] module offers `try_` variants that reject invalid input
//! with [`ConversionError`]. Parsing through `str::parse::<Rgb>()` is strict
//! as well and accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`.
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Rgb`], [`Hsv`] and [`Hsl`].

pub mod color;
pub mod error;
pub mod strict;

#[cfg(test)]
mod domain_tests;

pub use color::{
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
    temperature_to_rgb, Hsl, Hsv, Rgb, MAX_KELVIN, MIN_KELVIN,
};
pub use error::{ConversionError, ParseColorError};
