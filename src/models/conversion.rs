use clap::Subcommand;
use color_convert::{Hsl, Hsv, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single conversion request.
///
/// Doubles as the CLI subcommand set and as the entry format of batch files,
/// where the variant is selected by an `op` field:
///
/// ```yaml
/// - op: rgb-to-hsv
///   r: 255
///   g: 0
///   b: 128
/// - op: temperature
///   kelvin: 2700
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Conversion {
    /// Convert 8-bit RGB to HSV
    RgbToHsv { r: u8, g: u8, b: u8 },

    /// Convert 8-bit RGB to HSL
    RgbToHsl { r: u8, g: u8, b: u8 },

    /// Convert HSV (unit fractions) to 8-bit RGB
    #[command(allow_negative_numbers = true)]
    HsvToRgb { h: f64, s: f64, v: f64 },

    /// Convert HSL (unit fractions) to 8-bit RGB
    #[command(allow_negative_numbers = true)]
    HslToRgb { h: f64, s: f64, l: f64 },

    /// Convert a color temperature in kelvin to 8-bit RGB
    #[command(allow_negative_numbers = true)]
    Temperature { kelvin: i32 },

    /// Decode a hex string (e.g. FF0080) to 8-bit RGB
    HexToRgb {
        #[arg(allow_hyphen_values = true)]
        hex: String,
    },

    /// Encode 8-bit RGB as six uppercase hex digits
    RgbToHex { r: u8, g: u8, b: u8 },
}

impl Conversion {
    /// Operation name as used in batch files and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Conversion::RgbToHsv { .. } => "rgb-to-hsv",
            Conversion::RgbToHsl { .. } => "rgb-to-hsl",
            Conversion::HsvToRgb { .. } => "hsv-to-rgb",
            Conversion::HslToRgb { .. } => "hsl-to-rgb",
            Conversion::Temperature { .. } => "temperature",
            Conversion::HexToRgb { .. } => "hex-to-rgb",
            Conversion::RgbToHex { .. } => "rgb-to-hex",
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConversionOutput {
    Rgb(Rgb),
    Hsv(Hsv),
    Hsl(Hsl),
    Hex { hex: String },
}

impl fmt::Display for ConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionOutput::Rgb(c) => write!(f, "rgb({}, {}, {})", c.r, c.g, c.b),
            ConversionOutput::Hsv(c) => write!(f, "hsv({:.6}, {:.6}, {:.6})", c.h, c.s, c.v),
            ConversionOutput::Hsl(c) => write!(f, "hsl({:.6}, {:.6}, {:.6})", c.h, c.s, c.l),
            ConversionOutput::Hex { hex } => write!(f, "{hex}"),
        }
    }
}
