//! Unified error type for the region-fill public API.
//!
//! [`FillError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::canvas::CanvasError;
use crate::filler::UnknownFillerError;
use crate::gradient::GradientError;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the region-fill public API.
///
/// # Example
///
/// ```
/// use region_fill::{Argb, FillError, FillerKind, RegionFill};
///
/// fn configure(filler: &str, color: &str) -> Result<RegionFill, FillError> {
///     let kind: FillerKind = filler.parse()?;
///     let paint: Argb = color.parse()?;
///     Ok(RegionFill::new(kind).paint(paint))
/// }
///
/// assert!(configure("solid", "#FF0000").is_ok());
/// assert!(configure("spray", "#FF0000").is_err());
/// ```
#[derive(Debug)]
pub enum FillError {
    /// Pixel buffer does not describe a canvas
    Canvas(CanvasError),
    /// Palette validation error (empty, duplicate, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Gradient preset or ray parameters are invalid
    Gradient(GradientError),
    /// Filler key not found in the registry
    UnknownFiller(UnknownFillerError),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::Canvas(err) => write!(f, "canvas error: {}", err),
            FillError::Palette(err) => write!(f, "palette error: {}", err),
            FillError::ParseColor(err) => write!(f, "color parse error: {}", err),
            FillError::Gradient(err) => write!(f, "gradient error: {}", err),
            FillError::UnknownFiller(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FillError::Canvas(err) => Some(err),
            FillError::Palette(err) => Some(err),
            FillError::ParseColor(err) => Some(err),
            FillError::Gradient(err) => Some(err),
            FillError::UnknownFiller(err) => Some(err),
        }
    }
}

impl From<CanvasError> for FillError {
    fn from(err: CanvasError) -> Self {
        FillError::Canvas(err)
    }
}

impl From<PaletteError> for FillError {
    fn from(err: PaletteError) -> Self {
        FillError::Palette(err)
    }
}

impl From<ParseColorError> for FillError {
    fn from(err: ParseColorError) -> Self {
        FillError::ParseColor(err)
    }
}

impl From<GradientError> for FillError {
    fn from(err: GradientError) -> Self {
        FillError::Gradient(err)
    }
}

impl From<UnknownFillerError> for FillError {
    fn from(err: UnknownFillerError) -> Self {
        FillError::UnknownFiller(err)
    }
}
