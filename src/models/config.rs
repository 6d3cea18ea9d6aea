use std::path::{Path, PathBuf};

use region_fill::{Argb, GradientPreset, GradientSpec, Palette, RayFan, Tolerance};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TILEFILL_CONFIG";

/// Fill defaults loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FillConfig {
    /// Filler key (solid, outline, blend, contour, shade)
    pub filler: String,

    /// Paint color for solid and outline fills
    pub color: String,

    /// Tolerance in spinner steps of 500 distance units
    pub tolerance_steps: u32,

    /// Raw tolerance; takes precedence over `tolerance_steps`
    pub tolerance: Option<i32>,

    /// Color excluded when the tolerance is negative
    pub background: String,

    /// Border blend strength in percent
    pub blend_percent: u32,

    /// Gradient preset (linear, cushion, highlight, shine)
    pub gradient: String,

    /// Ray preset (horizontal, vertical, diagonal-up, diagonal-down, contour)
    pub rays: String,

    pub gradient_from: String,

    pub gradient_to: String,

    /// Colors the gradient endpoints snap to
    pub palette: Option<Vec<String>>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            filler: "solid".to_string(),
            color: "#000000".to_string(),
            tolerance_steps: 0,
            tolerance: None,
            background: "#00000000".to_string(),
            blend_percent: 50,
            gradient: "cushion".to_string(),
            rays: "contour".to_string(),
            gradient_from: "#000000".to_string(),
            gradient_to: "#FFFFFF".to_string(),
            palette: None,
        }
    }
}

impl FillConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file, failing on any error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), filler = %config.filler, "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a file, using defaults if it cannot be read
    /// or parsed.
    pub fn load_lenient(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve configuration for the CLI.
    ///
    /// An explicit path must load; a path from [`CONFIG_ENV`] is loaded
    /// leniently; without either the defaults apply.
    pub fn resolve(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match (explicit, env_path) {
            (Some(path), _) => Self::load(path),
            (None, Some(path)) => Ok(Self::load_lenient(&path)),
            (None, None) => Ok(Self::default()),
        }
    }

    /// Path from the [`CONFIG_ENV`] environment variable, if set.
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV).map(PathBuf::from)
    }

    pub fn tolerance(&self) -> Tolerance {
        match self.tolerance {
            Some(raw) => Tolerance::new(raw),
            None => Tolerance::from_steps(self.tolerance_steps),
        }
    }

    pub fn paint_color(&self) -> Result<Argb, ConfigError> {
        parse_color("color", &self.color)
    }

    pub fn background_color(&self) -> Result<Argb, ConfigError> {
        parse_color("background", &self.background)
    }

    /// Gradient from the configured endpoints and presets.
    ///
    /// An unknown gradient preset falls back to cushion with a warning; an
    /// unknown ray preset is an error.
    pub fn gradient_spec(&self) -> Result<GradientSpec, ConfigError> {
        let from = parse_color("gradient_from", &self.gradient_from)?;
        let to = parse_color("gradient_to", &self.gradient_to)?;
        let rays: RayFan = self.rays.parse()?;

        Ok(GradientSpec::new(from, to)
            .preset(GradientPreset::from_name_lenient(&self.gradient))
            .rays(rays))
    }

    pub fn palette(&self) -> Result<Option<Palette>, ConfigError> {
        match &self.palette {
            Some(colors) => {
                let refs: Vec<&str> = colors.iter().map(String::as_str).collect();
                Ok(Some(Palette::from_hex(&refs)?))
            }
            None => Ok(None),
        }
    }
}

/// Parse a hex color, naming the offending setting on failure.
pub fn parse_color(field: &'static str, value: &str) -> Result<Argb, ConfigError> {
    value
        .parse()
        .map_err(|e| ConfigError::color(field, value, e))
}
