use std::path::PathBuf;

use region_fill::{CanvasError, FillError, GradientError, PaletteError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid color for {field}: '{value}' ({source})")]
    InvalidColor {
        field: &'static str,
        value: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid gradient: {0}")]
    Gradient(#[from] GradientError),

    #[error("Invalid setting: {0}")]
    Fill(#[from] FillError),
}

impl ConfigError {
    /// Wrap a color parse failure with the setting it came from.
    pub fn color(field: &'static str, value: &str, source: ParseColorError) -> Self {
        ConfigError::InvalidColor {
            field,
            value: value.to_string(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
