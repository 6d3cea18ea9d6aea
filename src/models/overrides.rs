use region_fill::{
    FillError, FillerKind, GradientPreset, GradientSpec, RayFan, RegionFill, Tolerance,
};

use super::config::{parse_color, FillConfig};
use crate::error::ConfigError;

/// Command line settings that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillOverrides {
    pub filler: Option<String>,
    pub color: Option<String>,
    pub tolerance: Option<i32>,
    pub tolerance_steps: Option<u32>,
    pub background: Option<String>,
    pub blend_percent: Option<u32>,
    pub gradient: Option<String>,
    pub rays: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FillOverrides {
    /// Merge onto `config` and build the fill.
    ///
    /// Unlike the config file, explicit gradient names must be valid.
    pub fn resolve(&self, config: &FillConfig) -> Result<RegionFill, ConfigError> {
        let filler_key = self.filler.as_deref().unwrap_or(&config.filler);
        let kind: FillerKind = filler_key.parse().map_err(FillError::from)?;

        let paint = match &self.color {
            Some(value) => parse_color("color", value)?,
            None => config.paint_color()?,
        };
        let background = match &self.background {
            Some(value) => parse_color("background", value)?,
            None => config.background_color()?,
        };
        let tolerance = match (self.tolerance, self.tolerance_steps) {
            (Some(raw), _) => Tolerance::new(raw),
            (None, Some(steps)) => Tolerance::from_steps(steps),
            (None, None) => config.tolerance(),
        };

        let mut fill = RegionFill::new(kind)
            .paint(paint)
            .background(background)
            .tolerance(tolerance)
            .blend_percent(self.blend_percent.unwrap_or(config.blend_percent))
            .gradient(self.gradient_spec(config)?);
        if let Some(palette) = config.palette()? {
            fill = fill.palette(palette);
        }

        Ok(fill)
    }

    fn gradient_spec(&self, config: &FillConfig) -> Result<GradientSpec, ConfigError> {
        let mut spec = config.gradient_spec()?;
        if let Some(name) = &self.gradient {
            let preset: GradientPreset = name.parse()?;
            spec = spec.preset(preset);
        }
        if let Some(name) = &self.rays {
            let rays: RayFan = name.parse()?;
            spec = spec.rays(rays);
        }

        let from = match &self.from {
            Some(value) => parse_color("from", value)?,
            None => spec.start_color(),
        };
        let to = match &self.to {
            Some(value) => parse_color("to", value)?,
            None => spec.end_color(),
        };

        Ok(GradientSpec::new(from, to)
            .shape(spec.shape_function())
            .interpolator(spec.interpolator_kind())
            .rays(spec.ray_fan()))
    }
}
