//! Gradient configuration handed to the contour fillers.

use std::fmt;
use std::str::FromStr;

use super::{GradientError, Interpolator, RayFan, ShapeFunction};
use crate::color::Argb;
use crate::palette::PaletteLookup;

/// The four gradient styles an editor offers for contour fills.
///
/// Each preset pairs an [`Interpolator`] with a [`ShapeFunction`]:
///
/// | Preset | Interpolator | Shape |
/// |--------|--------------|-------|
/// | Linear | Linear | Linear |
/// | Cushion | Linear | Vee |
/// | Highlight | V2 | Vee |
/// | Shine | V2 | V2 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientPreset {
    Linear,
    #[default]
    Cushion,
    Highlight,
    Shine,
}

impl GradientPreset {
    pub const ALL: [GradientPreset; 4] = [
        GradientPreset::Linear,
        GradientPreset::Cushion,
        GradientPreset::Highlight,
        GradientPreset::Shine,
    ];

    /// Interpolator and shape function for this preset.
    pub fn parts(self) -> (Interpolator, ShapeFunction) {
        match self {
            GradientPreset::Linear => (Interpolator::Linear, ShapeFunction::Linear),
            GradientPreset::Cushion => (Interpolator::Linear, ShapeFunction::Vee),
            GradientPreset::Highlight => (Interpolator::V2, ShapeFunction::Vee),
            GradientPreset::Shine => (Interpolator::V2, ShapeFunction::V2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GradientPreset::Linear => "linear",
            GradientPreset::Cushion => "cushion",
            GradientPreset::Highlight => "highlight",
            GradientPreset::Shine => "shine",
        }
    }

    /// Parse a name, falling back to [`Cushion`](Self::Cushion) with a
    /// warning for anything unknown.
    ///
    /// Accepts full names as well as their first letter.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "invalid gradient selection, using cushion");
            GradientPreset::Cushion
        })
    }
}

impl fmt::Display for GradientPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientPreset {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        GradientPreset::ALL
            .into_iter()
            .find(|p| p.name() == key || (key.len() == 1 && p.name().starts_with(&key)))
            .ok_or_else(|| GradientError::UnknownPreset(s.to_string()))
    }
}

/// Everything a contour filler needs to shade a region.
///
/// Built with a consuming builder; the defaults are the
/// [`Cushion`](GradientPreset::Cushion) preset and the
/// [`CONTOUR`](RayFan::CONTOUR) ray fan.
///
/// # Example
///
/// ```
/// use region_fill::{Argb, GradientPreset, GradientSpec, RayFan};
///
/// let spec = GradientSpec::new(Argb::BLACK, Argb::WHITE)
///     .preset(GradientPreset::Shine)
///     .rays(RayFan::VERTICAL);
///
/// assert_eq!(spec.start_color(), Argb::BLACK);
/// assert_eq!(spec.ray_fan(), RayFan::VERTICAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    from: Argb,
    to: Argb,
    shape: ShapeFunction,
    interpolator: Interpolator,
    rays: RayFan,
}

impl GradientSpec {
    /// Gradient from `from` (at factor 0) to `to` (at factor 1).
    pub fn new(from: Argb, to: Argb) -> Self {
        let (interpolator, shape) = GradientPreset::default().parts();
        Self {
            from,
            to,
            shape,
            interpolator,
            rays: RayFan::default(),
        }
    }

    /// Use the interpolator and shape of a preset.
    #[inline]
    pub fn preset(mut self, preset: GradientPreset) -> Self {
        let (interpolator, shape) = preset.parts();
        self.interpolator = interpolator;
        self.shape = shape;
        self
    }

    /// Override the shape function.
    #[inline]
    pub fn shape(mut self, shape: ShapeFunction) -> Self {
        self.shape = shape;
        self
    }

    /// Override the interpolator.
    #[inline]
    pub fn interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Set the sampled ray directions.
    #[inline]
    pub fn rays(mut self, rays: RayFan) -> Self {
        self.rays = rays;
        self
    }

    /// Replace both endpoints by their closest palette entries.
    ///
    /// ```
    /// use region_fill::{Argb, GradientSpec, Palette};
    ///
    /// let palette = Palette::from_hex(&["#000000", "#808080", "#FFFFFF"]).unwrap();
    /// let spec = GradientSpec::new(Argb::opaque(10, 10, 10), Argb::opaque(120, 130, 140))
    ///     .snap_to_palette(&palette);
    ///
    /// assert_eq!(spec.start_color(), Argb::BLACK);
    /// assert_eq!(spec.end_color(), Argb::opaque(0x80, 0x80, 0x80));
    /// ```
    pub fn snap_to_palette<P: PaletteLookup + ?Sized>(mut self, palette: &P) -> Self {
        self.from = palette.color(palette.best_match(self.from));
        self.to = palette.color(palette.best_match(self.to));
        self
    }

    #[inline]
    pub fn start_color(&self) -> Argb {
        self.from
    }

    #[inline]
    pub fn end_color(&self) -> Argb {
        self.to
    }

    #[inline]
    pub fn shape_function(&self) -> ShapeFunction {
        self.shape
    }

    #[inline]
    pub fn interpolator_kind(&self) -> Interpolator {
        self.interpolator
    }

    #[inline]
    pub fn ray_fan(&self) -> RayFan {
        self.rays
    }

    /// Color at blend factor `f`.
    #[inline]
    pub fn color_at(&self, f: f64) -> Argb {
        self.interpolator.interpolate(f, self.from, self.to)
    }
}
