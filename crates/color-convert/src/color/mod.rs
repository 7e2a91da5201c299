//! Color types and conversion functions
//!
//! Every conversion is a pure function of its input and comes in two forms:
//! a free function (`rgb_to_hsv`, `hsl_to_rgb`, ...) and the equivalent
//! `From` impl between the value types.
//!
//! # Color Models
//!
//! - **Rgb**: 8-bit device channels. Use for LED drivers and displays.
//! - **Hsv**: hue, saturation, value as unit fractions.
//! - **Hsl**: hue, saturation, lightness as unit fractions.
//!
//! # Example
//!
//! ```
//! use color_convert::{Hsv, Rgb};
//!
//! let rgb = Rgb::new(255, 128, 0);
//! let hsv = Hsv::from(rgb);
//!
//! // Dim to half brightness and go back to device values
//! let dimmed = Rgb::from(Hsv { v: hsv.v / 2.0, ..hsv });
//! assert_eq!(dimmed.r, 127);
//! ```

mod hex;
mod hsl;
mod hsv;
mod math;
mod rgb;
mod temperature;

pub use hex::{hex_to_rgb, parse_hex, rgb_to_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use rgb::Rgb;
pub use temperature::{temperature_to_rgb, MAX_KELVIN, MIN_KELVIN};
