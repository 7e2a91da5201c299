use color_convert::ConversionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Batch entry {index} failed: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
