use color_convert::{strict, Hsl, Hsv, Rgb};

use crate::error::AppError;
use crate::models::{AppConfig, Conversion, ConversionMode, ConversionOutput};

/// Executes conversion requests in a fixed mode
///
/// Permissive mode calls the never-failing conversions. Strict mode routes
/// the inputs that can be out of range (HSV, HSL, kelvin, hex strings)
/// through the validated variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorService {
    mode: ConversionMode,
}

impl ColorService {
    pub fn new(mode: ConversionMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.mode)
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Run a single conversion
    pub fn convert(&self, conversion: &Conversion) -> Result<ConversionOutput, AppError> {
        let result = match self.mode {
            ConversionMode::Permissive => Ok(Self::convert_permissive(conversion)),
            ConversionMode::Strict => Self::convert_strict(conversion),
        };

        match &result {
            Ok(output) => tracing::debug!(
                op = conversion.kind(),
                mode = ?self.mode,
                %output,
                "Conversion complete"
            ),
            Err(e) => tracing::debug!(
                op = conversion.kind(),
                mode = ?self.mode,
                %e,
                "Conversion rejected"
            ),
        }

        result
    }

    fn convert_permissive(conversion: &Conversion) -> ConversionOutput {
        match *conversion {
            Conversion::RgbToHsv { r, g, b } => {
                ConversionOutput::Hsv(color_convert::rgb_to_hsv(Rgb::new(r, g, b)))
            }
            Conversion::RgbToHsl { r, g, b } => {
                ConversionOutput::Hsl(color_convert::rgb_to_hsl(Rgb::new(r, g, b)))
            }
            Conversion::HsvToRgb { h, s, v } => {
                ConversionOutput::Rgb(color_convert::hsv_to_rgb(Hsv::new(h, s, v)))
            }
            Conversion::HslToRgb { h, s, l } => {
                ConversionOutput::Rgb(color_convert::hsl_to_rgb(Hsl::new(h, s, l)))
            }
            Conversion::Temperature { kelvin } => {
                ConversionOutput::Rgb(color_convert::temperature_to_rgb(kelvin))
            }
            Conversion::HexToRgb { ref hex } => {
                ConversionOutput::Rgb(color_convert::hex_to_rgb(hex))
            }
            Conversion::RgbToHex { r, g, b } => ConversionOutput::Hex {
                hex: color_convert::rgb_to_hex(Rgb::new(r, g, b)),
            },
        }
    }

    fn convert_strict(conversion: &Conversion) -> Result<ConversionOutput, AppError> {
        let output = match *conversion {
            Conversion::HsvToRgb { h, s, v } => {
                ConversionOutput::Rgb(strict::try_hsv_to_rgb(Hsv::new(h, s, v))?)
            }
            Conversion::HslToRgb { h, s, l } => {
                ConversionOutput::Rgb(strict::try_hsl_to_rgb(Hsl::new(h, s, l))?)
            }
            Conversion::Temperature { kelvin } => {
                ConversionOutput::Rgb(strict::try_temperature_to_rgb(kelvin)?)
            }
            Conversion::HexToRgb { ref hex } => {
                ConversionOutput::Rgb(strict::try_hex_to_rgb(hex)?)
            }
            // Byte inputs are valid by construction
            Conversion::RgbToHsv { .. }
            | Conversion::RgbToHsl { .. }
            | Conversion::RgbToHex { .. } => Self::convert_permissive(conversion),
        };
        Ok(output)
    }
}
