//! Named filler registry.

use std::fmt;
use std::str::FromStr;

use super::{BlendedOutline, ContourBrightnessFill, ContourFill, Filler, OutlineFill, SolidFill};
use crate::color::Argb;
use crate::gradient::GradientSpec;

/// Every filler the engine ships with, addressable by a short key.
///
/// # Example
///
/// ```
/// use region_fill::{Filler, FillerKind, FillerOptions};
///
/// let kind: FillerKind = "shade".parse().unwrap();
/// let filler = kind.build(&FillerOptions::default());
/// assert_eq!(filler.name(), "shade");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillerKind {
    #[default]
    Solid,
    Outline,
    BlendedOutline,
    Contour,
    ContourBrightness,
}

impl FillerKind {
    pub const ALL: [FillerKind; 5] = [
        FillerKind::Solid,
        FillerKind::Outline,
        FillerKind::BlendedOutline,
        FillerKind::Contour,
        FillerKind::ContourBrightness,
    ];

    /// Key used on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            FillerKind::Solid => "solid",
            FillerKind::Outline => "outline",
            FillerKind::BlendedOutline => "blend",
            FillerKind::Contour => "contour",
            FillerKind::ContourBrightness => "shade",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            FillerKind::Solid => "fill the region with the paint color",
            FillerKind::Outline => "paint the region border",
            FillerKind::BlendedOutline => "mix the region border with the paint color",
            FillerKind::Contour => "shade the region with a contour gradient",
            FillerKind::ContourBrightness => "rescale region brightness along a contour gradient",
        }
    }

    /// Whether the filler reads the gradient options.
    pub fn uses_gradient(self) -> bool {
        matches!(self, FillerKind::Contour | FillerKind::ContourBrightness)
    }

    /// Construct a fresh, idle filler.
    pub fn build(self, options: &FillerOptions) -> Box<dyn Filler> {
        match self {
            FillerKind::Solid => Box::new(SolidFill::new()),
            FillerKind::Outline => Box::new(OutlineFill::new()),
            FillerKind::BlendedOutline => Box::new(BlendedOutline::new(options.blend_power)),
            FillerKind::Contour => Box::new(ContourFill::new(options.gradient)),
            FillerKind::ContourBrightness => Box::new(ContourBrightnessFill::new(options.gradient)),
        }
    }
}

impl fmt::Display for FillerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned by [`FillerKind::from_str`] for an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFillerError(pub String);

impl fmt::Display for UnknownFillerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = FillerKind::ALL.iter().map(|k| k.key()).collect();
        write!(f, "unknown filler '{}' (expected one of: {})", self.0, keys.join(", "))
    }
}

impl std::error::Error for UnknownFillerError {}

impl FromStr for FillerKind {
    type Err = UnknownFillerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FillerKind::ALL
            .into_iter()
            .find(|k| k.key() == key)
            .ok_or_else(|| UnknownFillerError(s.to_string()))
    }
}

/// Parameters consumed by [`FillerKind::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerOptions {
    /// Border blend power in `0..=256`.
    pub blend_power: i32,
    /// Gradient for the contour fillers.
    pub gradient: GradientSpec,
}

impl FillerOptions {
    /// Set the blend power from a `0..=100` percentage.
    #[inline]
    pub fn blend_percent(mut self, percent: u32) -> Self {
        self.blend_power = BlendedOutline::from_percent(percent).power();
        self
    }

    #[inline]
    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = gradient;
        self
    }
}

impl Default for FillerOptions {
    fn default() -> Self {
        Self {
            blend_power: 128,
            gradient: GradientSpec::new(Argb::BLACK, Argb::WHITE),
        }
    }
}
