//! Region post-processors driven by the fill engine.
//!
//! The engine discovers a region and streams callbacks; a [`Filler`] decides
//! what those callbacks mean. Fillers buffer their output and only touch the
//! canvas in [`Filler::finish`], so the membership test of the engine always
//! sees the original pixels.
//!
//! # Lifecycle
//!
//! ```text
//! start(canvas, paint)
//!   begin_pass(Horizontal)  plot_inside / plot_border / plot_line ...
//!   begin_pass(Vertical)    plot_inside / plot_border / plot_line ...
//! finish(canvas, vertical marks)
//! ```
//!
//! Every filler checks this order and panics on misuse: plotting or finishing
//! before `start`, or starting twice without `finish` in between. After
//! `finish` the filler is idle again and may be reused for another fill.
//!
//! # Available Fillers
//!
//! | Filler | inside | border | finish |
//! |--------|--------|--------|--------|
//! | [`SolidFill`] | paint | - | composite layer |
//! | [`OutlineFill`] | - | paint | composite layer |
//! | [`BlendedOutline`] | - | blend canvas with paint | composite layer |
//! | [`ContourFill`] | - | - | shade marked pixels by gradient |
//! | [`ContourBrightnessFill`] | - | - | shade marked pixels by brightness |
//!
//! [`FillerKind`] is the registry mapping names to constructors.

mod contour;
mod layer;
mod outline;
mod registry;
mod solid;

pub use contour::{ContourBrightnessFill, ContourFill};
pub use layer::Layer;
pub use outline::{BlendedOutline, OutlineFill};
pub use registry::{FillerKind, FillerOptions, UnknownFillerError};
pub use solid::SolidFill;

use crate::canvas::{Canvas, MarkGrid};
use crate::color::Argb;

/// Which scan orientation the engine is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Rows are scanned left/right, growth continues up and down.
    Horizontal,
    /// Columns are scanned up/down, growth continues left and right.
    Vertical,
}

/// A pluggable strategy that turns region callbacks into pixels.
///
/// Callbacks during the passes get a shared canvas reference for reading;
/// only [`finish`](Filler::finish) may write.
pub trait Filler {
    /// Short name used in logs and panic messages.
    fn name(&self) -> &'static str;

    /// Prepare for one fill. `paint` is the caller's foreground color.
    fn start(&mut self, canvas: &Canvas, paint: Argb);

    /// Called before each scan pass.
    fn begin_pass(&mut self, _pass: Pass) {}

    /// A pixel was added to the region.
    fn plot_inside(&mut self, canvas: &Canvas, x: usize, y: usize);

    /// A pixel at the end of a scanned run.
    fn plot_border(&mut self, canvas: &Canvas, x: usize, y: usize);

    /// A complete run from `(x, y)` to `(x2, y2)` was discovered.
    fn plot_line(&mut self, _x: usize, _y: usize, _x2: usize, _y2: usize) {}

    /// Write the buffered result into the canvas.
    ///
    /// `marks` is the visited grid of the vertical pass and always has the
    /// canvas' dimensions.
    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid);
}

/// Panic unless `marks` matches the canvas size.
pub(crate) fn assert_same_size(name: &str, canvas: &Canvas, marks: &MarkGrid) {
    assert!(
        canvas.width() == marks.width() && canvas.height() == marks.height(),
        "{name} filler: mark grid {}x{} does not match canvas {}x{}",
        marks.width(),
        marks.height(),
        canvas.width(),
        canvas.height()
    );
}

/// Borrow the scratch layer of a running filler, panicking if it is idle.
pub(crate) fn running_layer<'a>(
    layer: &'a mut Option<Layer>,
    name: &str,
    op: &str,
) -> &'a mut Layer {
    match layer {
        Some(layer) => layer,
        None => panic!("{name} filler: {op} called before start"),
    }
}

/// Panic if a filler that is still running gets started again.
pub(crate) fn assert_idle(running: bool, name: &str) {
    assert!(
        !running,
        "{name} filler: start called while a fill is still in progress"
    );
}
