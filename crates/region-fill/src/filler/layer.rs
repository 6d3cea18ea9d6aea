//! Transparent scratch buffer a filler paints into before compositing.

use crate::canvas::Canvas;
use crate::color::Argb;

/// A transparent ARGB buffer sized to the canvas.
#[derive(Debug, Clone)]
pub struct Layer {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl Layer {
    /// A fully transparent layer matching `canvas`.
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    /// A fully transparent layer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Argb::TRANSPARENT; width * height],
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Argb) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Argb {
        self.pixels[y * self.width + x]
    }

    /// Number of pixels that are not fully transparent.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Draw the layer over `canvas` with source-over compositing.
    ///
    /// # Panics
    ///
    /// Panics when the canvas size differs from the layer size.
    pub fn composite_onto(&self, canvas: &mut Canvas) {
        assert!(
            canvas.width() == self.width && canvas.height() == self.height,
            "layer {}x{} does not match canvas {}x{}",
            self.width,
            self.height,
            canvas.width(),
            canvas.height()
        );

        for y in 0..self.height {
            for x in 0..self.width {
                let src = self.get(x, y);
                if src.is_transparent() {
                    continue;
                }
                let dst = canvas.pixel(x, y);
                canvas.set(x, y, src.over(dst));
            }
        }
    }
}
