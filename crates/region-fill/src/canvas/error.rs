//! Error type for canvas construction.

use std::fmt;

/// Returned when a pixel buffer does not describe a valid canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Pixel count does not equal `width * height`
    LengthMismatch {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Number of pixels supplied
        actual: usize,
    },
    /// Byte buffer length is not a multiple of four
    PartialPixel {
        /// Length of the byte buffer
        len: usize,
    },
    /// `width * height` overflows `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::LengthMismatch {
                width,
                height,
                actual,
            } => write!(
                f,
                "pixel buffer has {} pixels, expected {}x{}={}",
                actual,
                width,
                height,
                width * height
            ),
            CanvasError::PartialPixel { len } => {
                write!(f, "byte buffer length {} is not a multiple of 4", len)
            }
            CanvasError::TooLarge { width, height } => {
                write!(f, "canvas dimensions {}x{} overflow", width, height)
            }
        }
    }
}

impl std::error::Error for CanvasError {}
