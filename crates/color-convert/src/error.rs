//! Error types for the validated conversion path
//!
//! The permissive conversions never fail. These types are only produced by
//! the [`strict`](crate::strict) functions and by parsing hex strings through
//! [`FromStr`](std::str::FromStr).

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for validated conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// An input component is outside the domain the conversion is defined on
    #[error("invalid argument: {name} = {value} (expected {expected})")]
    InvalidArgument {
        /// Component name, e.g. `"hue"` or `"kelvin"`
        name: &'static str,
        /// The rejected value, formatted for display
        value: String,
        /// Human readable description of the accepted range
        expected: &'static str,
    },
    /// Hex input could not be parsed
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}

impl ConversionError {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        ConversionError::InvalidArgument {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
