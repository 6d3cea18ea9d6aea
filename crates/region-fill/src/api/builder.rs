//! RegionFill builder -- the primary ergonomic entry point for the crate.
//!
//! [`RegionFill`] bundles a filler choice with its options and the
//! membership rule, and builds a fresh filler for every fill.

use crate::canvas::Canvas;
use crate::color::Argb;
use crate::fill::{FillReport, Fillmachine, Tolerance};
use crate::filler::{FillerKind, FillerOptions};
use crate::gradient::GradientSpec;
use crate::palette::Palette;

/// High-level fill builder.
///
/// # Design
///
/// - Constructor takes the [`FillerKind`]; every other setting has a default
/// - Configuration methods consume and return `self`
/// - [`fill()`](Self::fill) takes `&self`, so one builder serves many fills
/// - A configured palette snaps the gradient endpoints before each fill
///
/// # Example
///
/// ```
/// use region_fill::{Argb, Canvas, FillerKind, RegionFill, Tolerance};
///
/// let mut canvas = Canvas::new(4, 4, Argb::WHITE);
/// let report = RegionFill::new(FillerKind::Solid)
///     .paint(Argb::opaque(255, 0, 0))
///     .tolerance(Tolerance::from_steps(1))
///     .fill(&mut canvas, 0, 0);
///
/// assert_eq!(report.vertical_marked, 16);
/// assert_eq!(canvas.pixel(3, 3), Argb::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct RegionFill {
    kind: FillerKind,
    tolerance: Tolerance,
    background: Argb,
    paint: Argb,
    options: FillerOptions,
    palette: Option<Palette>,
}

impl RegionFill {
    /// Exact tolerance, black paint, transparent background, default options.
    pub fn new(kind: FillerKind) -> Self {
        Self {
            kind,
            tolerance: Tolerance::exact(),
            background: Argb::TRANSPARENT,
            paint: Argb::BLACK,
            options: FillerOptions::default(),
            palette: None,
        }
    }

    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Color excluded in background-exclusion mode.
    #[inline]
    pub fn background(mut self, background: Argb) -> Self {
        self.background = background;
        self
    }

    /// Foreground color handed to the filler.
    #[inline]
    pub fn paint(mut self, paint: Argb) -> Self {
        self.paint = paint;
        self
    }

    /// Blend strength of [`FillerKind::BlendedOutline`] in percent.
    #[inline]
    pub fn blend_percent(mut self, percent: u32) -> Self {
        self.options = self.options.blend_percent(percent);
        self
    }

    /// Gradient of the contour fillers.
    #[inline]
    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.options = self.options.gradient(gradient);
        self
    }

    /// Snap gradient endpoints to this palette before filling.
    #[inline]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn kind(&self) -> FillerKind {
        self.kind
    }

    /// Options after palette snapping, as passed to the filler.
    pub fn resolved_options(&self) -> FillerOptions {
        match &self.palette {
            Some(palette) => self
                .options
                .gradient(self.options.gradient.snap_to_palette(palette)),
            None => self.options,
        }
    }

    /// Fill the region around `(x, y)` in place.
    pub fn fill(&self, canvas: &mut Canvas, x: i64, y: i64) -> FillReport {
        let mut filler = self.kind.build(&self.resolved_options());
        Fillmachine::new(self.tolerance, self.background).fill(
            canvas,
            x,
            y,
            self.paint,
            filler.as_mut(),
        )
    }
}
