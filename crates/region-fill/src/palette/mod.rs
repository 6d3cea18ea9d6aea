//! Palette types and utilities
//!
//! This module provides the [`PaletteLookup`] contract the contour fillers
//! consume, a simple [`Palette`] implementing it, and error types for
//! parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteLookup};
