use crate::error::AppError;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "RGBCONV_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Whether conversions validate their input
    #[serde(default)]
    pub mode: ConversionMode,

    /// How results are printed
    #[serde(default)]
    pub format: OutputFormat,
}

/// Input handling for conversions
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Accept any input, clamp or wrap what is out of range
    #[default]
    Permissive,
    /// Reject out-of-range components and malformed hex strings
    Strict,
}

/// Output encoding for conversion results
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, one result per line
    #[default]
    Text,
    /// JSON, one document per invocation
    Json,
}

impl AppConfig {
    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file, failing on any read or parse error
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            mode = ?config.mode,
            format = ?config.format,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration if a path is given, falling back to defaults on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Config path from the environment, if set and non-empty
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        mode: Option<ConversionMode>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
