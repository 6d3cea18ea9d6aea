#![allow(clippy::module_inception, clippy::too_many_arguments)]

//! region-fill: scanline seed fill with pluggable region effects
//!
//! This library discovers the connected region around a seed pixel of an
//! ARGB canvas and hands it to a [`Filler`] that decides what to do with it:
//! paint it, outline it, or shade it with a contour gradient.
//!
//! # Quick Start
//!
//! The [`RegionFill`] builder is the primary entry point:
//!
//! ```
//! use region_fill::{Argb, Canvas, FillerKind, RegionFill};
//!
//! let mut canvas = Canvas::new(8, 8, Argb::WHITE);
//! RegionFill::new(FillerKind::Outline)
//!     .paint(Argb::BLACK)
//!     .fill(&mut canvas, 3, 3);
//!
//! assert_eq!(canvas.pixel(0, 0), Argb::BLACK);
//! assert_eq!(canvas.pixel(3, 3), Argb::WHITE);
//! ```
//!
//! # Direct Engine API
//!
//! For custom fillers, drive the engine yourself:
//!
//! ```
//! use region_fill::{fill, Argb, Canvas, SolidFill, Tolerance};
//!
//! let mut canvas = Canvas::new(4, 4, Argb::opaque(0x10, 0x20, 0x30));
//! let report = fill(
//!     &mut canvas,
//!     1,
//!     1,
//!     Tolerance::exact(),
//!     Argb::opaque(255, 0, 0),
//!     Argb::TRANSPARENT,
//!     &mut SolidFill::new(),
//! );
//!
//! assert_eq!(report.vertical_marked, 16);
//! ```
//!
//! # How a Fill Runs
//!
//! ```text
//! seed pixel  -> FillContext (seed color, tolerance, background)
//!     |
//!     v
//! horizontal pass   rows scanned left/right, growth up/down
//!     |                 plot_inside / plot_border / plot_line
//!     v
//! vertical pass     columns scanned up/down, growth left/right
//!     |                 plot_inside / plot_border / plot_line
//!     v
//! Filler::finish(canvas, vertical marks)
//! ```
//!
//! Each pass keeps its own [`MarkGrid`]. Scanning both orientations lets
//! border-sensitive fillers see the top and bottom edges of a region as well
//! as its left and right edges.
//!
//! # Membership
//!
//! | Tolerance | A pixel joins the region when |
//! |-----------|-------------------------------|
//! | `>= 0` | `diff(pixel, seed) <= tolerance` |
//! | `< 0` | `pixel != background` and alpha is not 0 |
//!
//! [`Argb::diff`] weighs the channels `1:2:3:1` for `A:R:G:B`.
//!
//! # Contour Shading
//!
//! [`ContourFill`] and [`ContourBrightnessFill`] cast rays through every
//! region pixel, measure the distance to the region edge in both directions
//! and average a [`ShapeFunction`] over all rays of a [`RayFan`]. The
//! average picks a color through an [`Interpolator`]. A [`GradientPreset`]
//! names the four combinations an editor usually offers.

pub mod api;
pub mod canvas;
pub mod color;
pub mod fill;
pub mod filler;
pub mod gradient;
pub mod palette;


pub use api::{FillError, RegionFill};
pub use canvas::{Canvas, CanvasError, MarkGrid};
pub use color::Argb;
pub use fill::{fill, FillContext, FillReport, Fillmachine, Tolerance};
pub use filler::{
    BlendedOutline, ContourBrightnessFill, ContourFill, Filler, FillerKind, FillerOptions, Layer,
    OutlineFill, Pass, SolidFill, UnknownFillerError,
};
pub use gradient::{
    GradientError, GradientPreset, GradientSpec, Interpolator, RayFan, ShapeFunction,
};
pub use palette::{Palette, PaletteError, PaletteLookup, ParseColorError};
