//! Indexed color palette with best-match lookup.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Argb;

/// Color lookup the contour fillers use to pick gradient endpoints.
///
/// Editors keep their own palette widget; this trait is the narrow surface
/// the fill engine needs from it.
pub trait PaletteLookup {
    /// Index of the entry closest to `color`.
    fn best_match(&self, color: Argb) -> usize;

    /// Color stored at `index`.
    fn color(&self, index: usize) -> Argb;

    /// Number of entries.
    fn len(&self) -> usize;

    /// True when the palette has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered list of distinct ARGB colors.
///
/// Matching uses [`Argb::diff`], the same metric the fill tolerance is
/// measured in, so a color that is "similar enough" to fill over is also the
/// one the palette snaps to.
///
/// # Example
///
/// ```
/// use region_fill::{Argb, Palette, PaletteLookup};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
/// assert_eq!(palette.best_match(Argb::opaque(240, 10, 10)), 2);
/// assert_eq!(palette.color(1), Argb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Argb>,
}

impl Palette {
    /// Create a palette from colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] when `colors` is empty
    /// - [`PaletteError::DuplicateColor`] when a color appears twice
    pub fn new(colors: &[Argb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Argb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// All entries in order.
    #[inline]
    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }
}

impl PaletteLookup for Palette {
    /// Linear scan; the lowest index wins ties.
    fn best_match(&self, color: Argb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = i32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.diff(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }

    #[inline]
    fn color(&self, index: usize) -> Argb {
        self.colors[index]
    }

    #[inline]
    fn len(&self) -> usize {
        self.colors.len()
    }
}
