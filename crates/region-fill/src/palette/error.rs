//! Hex color and palette errors

use std::fmt;

/// A hex color string that is not `RGB`, `RRGGBB` or `AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Number of digits after the optional `#`
    Length(usize),
    /// First character that is not a hexadecimal digit
    Digit {
        /// Position among the digits, not counting `#`
        index: usize,
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Length(n) => {
                write!(f, "expected 3, 6 or 8 hex digits, got {n}")
            }
            ParseColorError::Digit { index, found } => {
                write!(f, "'{found}' at digit {index} is not a hex digit")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// A color list that cannot serve as a snapping palette.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// A palette needs at least one color
    EmptyPalette,
    /// `index` repeats an earlier color, so lookups would be ambiguous
    DuplicateColor { index: usize },
    /// One of the hex strings did not parse
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => f.write_str("palette has no colors"),
            PaletteError::DuplicateColor { index } => {
                write!(f, "palette color {index} repeats an earlier entry")
            }
            PaletteError::ParseColor(err) => write!(f, "palette color: {err}"),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
