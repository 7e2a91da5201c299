//! Hexadecimal string encoding of RGB colors
//!
//! Two parsers live here:
//!
//! - [`hex_to_rgb`] is the permissive parser. It reads the longest run of hex
//!   digits as a signed base-16 integer and never fails. Garbage in gives
//!   a partial value (usually black), not an error.
//! - [`FromStr`] for [`Rgb`] is the strict parser. It accepts `#RRGGBB`,
//!   `RRGGBB`, `#RGB` and `RGB` and reports anything else.

use std::str::FromStr;

use super::rgb::Rgb;
use crate::error::ParseColorError;

/// Encode a color as exactly six uppercase hex digits, `RRGGBB`.
///
/// # Example
/// ```
/// use color_convert::{rgb_to_hex, Rgb};
/// assert_eq!(rgb_to_hex(Rgb::new(255, 0, 128)), "FF0080");
/// assert_eq!(rgb_to_hex(Rgb::new(0, 10, 1)), "000A01");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Decode a hex string into a color without validation.
///
/// Leading whitespace, a sign and a `0x` prefix are skipped, then hex digits
/// are consumed until the first non-hex character. The resulting integer is
/// split into bits 16..24 (red), 8..16 (green) and 0..8 (blue). Characters
/// beyond the sixth digit shift the value, so `"FF008000"` is not the same
/// color as `"FF0080"`.
///
/// # Example
/// ```
/// use color_convert::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("FF0080"), Rgb::new(255, 0, 128));
/// assert_eq!(hex_to_rgb("ff0080 trailing"), Rgb::new(255, 0, 128));
/// // A leading '#' stops the parser before any digit
/// assert_eq!(hex_to_rgb("#FF0080"), Rgb::new(0, 0, 0));
/// ```
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let number = parse_leading_hex(hex);
    Rgb::new(
        (number >> 16) as u8,
        ((number >> 8) & 0xFF) as u8,
        (number & 0xFF) as u8,
    )
}

/// Read a leading base-16 integer: optional whitespace, sign and `0x`
/// prefix, then hex digits up to the first other char.
///
/// Overflow saturates at `i64::MAX` / `i64::MIN`. No digits yields 0.
fn parse_leading_hex(s: &str) -> i64 {
    let bytes = s.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    // The prefix only counts when a hex digit follows it
    if bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit)
    {
        pos += 2;
    }

    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    for digit in bytes[pos..]
        .iter()
        .map_while(|&c| char::from(c).to_digit(16))
    {
        match magnitude
            .checked_mul(16)
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
    }

    match (negative, overflowed) {
        (false, true) => i64::MAX,
        (true, true) => i64::MIN,
        (false, false) => i64::try_from(magnitude).unwrap_or(i64::MAX),
        (true, false) => {
            if magnitude > i64::MIN.unsigned_abs() {
                i64::MIN
            } else {
                0i64.wrapping_sub_unsigned(magnitude)
            }
        }
    }
}

/// Parse a hex string strictly.
///
/// Equivalent to `s.parse::<Rgb>()`.
pub fn parse_hex(s: &str) -> Result<Rgb, ParseColorError> {
    s.parse()
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an RGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_convert::Rgb;
    ///
    /// let pink: Rgb = "#FF0080".parse().unwrap();
    /// assert_eq!(pink, Rgb::new(255, 0, 128));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !matches!(s.len(), 3 | 6) {
            return Err(ParseColorError::InvalidLength);
        }
        // Checked up front: from_str_radix accepts a leading '+', and slicing
        // below needs ASCII
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(invalid_digit(bad));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            _ => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
        }
    }
}

fn invalid_digit(c: char) -> ParseColorError {
    let mut buf = [0u8; 4];
    match u8::from_str_radix(c.encode_utf8(&mut buf), 16) {
        Err(err) => ParseColorError::InvalidHex(err),
        // Not reachable for a non-hex character
        Ok(_) => ParseColorError::InvalidLength,
    }
}
