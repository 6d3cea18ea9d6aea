//! The ARGB canvas the fill engine mutates.

use super::CanvasError;
use crate::color::Argb;

/// A width x height grid of ARGB pixels in row-major order.
///
/// The canvas is owned by the caller. The fill engine borrows it mutably for
/// the duration of one fill and never reallocates it.
///
/// # Example
///
/// ```
/// use region_fill::{Argb, Canvas};
///
/// let mut canvas = Canvas::new(4, 3, Argb::WHITE);
/// canvas.set(1, 2, Argb::BLACK);
///
/// assert_eq!(canvas.get(1, 2), Some(Argb::BLACK));
/// assert_eq!(canvas.get(-1, 0), None);
/// assert_eq!(canvas.get(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl Canvas {
    /// Create a canvas filled with one color.
    pub fn new(width: usize, height: usize, fill: Argb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap an existing pixel vector.
    ///
    /// Fails when `pixels.len() != width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Argb>,
    ) -> Result<Self, CanvasError> {
        let expected = width
            .checked_mul(height)
            .ok_or(CanvasError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(CanvasError::LengthMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode a tightly packed `[R, G, B, A, ...]` byte buffer.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, CanvasError> {
        if bytes.len() % 4 != 0 {
            return Err(CanvasError::PartialPixel { len: bytes.len() });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Argb::from_rgba_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Encode to a tightly packed `[R, G, B, A, ...]` byte buffer.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba_bytes());
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the canvas has no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `(x, y)` lies inside the canvas.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Bounds-checked read. Out-of-range coordinates yield `None`.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Argb> {
        if self.contains(x, y) {
            Some(self.pixels[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Read a pixel known to be in range.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the canvas.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Argb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// Write a pixel.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the canvas.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Argb) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Give the pixel vector back to the caller.
    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }
}
