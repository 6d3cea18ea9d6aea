//! Pixel storage for the fill engine.
//!
//! [`Canvas`] is the caller-owned ARGB buffer a fill mutates in place, and
//! [`MarkGrid`] is the per-pass visited bitmap the engine builds while
//! discovering a region.

mod buffer;
mod error;
mod mark_grid;

pub use buffer::Canvas;
pub use error::CanvasError;
pub use mark_grid::MarkGrid;
