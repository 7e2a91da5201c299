pub mod config;
pub mod conversion;

pub use config::{AppConfig, ConversionMode, OutputFormat, CONFIG_ENV_VAR};
pub use conversion::{Conversion, ConversionOutput};
