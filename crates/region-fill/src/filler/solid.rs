//! Plain color fill.

use super::{assert_idle, assert_same_size, running_layer, Filler, Layer};
use crate::canvas::{Canvas, MarkGrid};
use crate::color::Argb;

/// Paints every discovered pixel with the foreground color.
///
/// # Example
///
/// ```
/// use region_fill::{fill, Argb, Canvas, SolidFill, Tolerance};
///
/// let mut canvas = Canvas::new(4, 4, Argb::WHITE);
/// let mut filler = SolidFill::new();
/// fill(&mut canvas, 1, 1, Tolerance::exact(), Argb::BLACK, Argb::TRANSPARENT, &mut filler);
///
/// assert!(canvas.pixels().iter().all(|&c| c == Argb::BLACK));
/// ```
#[derive(Debug, Default)]
pub struct SolidFill {
    layer: Option<Layer>,
    paint: Argb,
}

impl SolidFill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filler for SolidFill {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn start(&mut self, canvas: &Canvas, paint: Argb) {
        assert_idle(self.layer.is_some(), self.name());
        self.layer = Some(Layer::for_canvas(canvas));
        self.paint = paint;
    }

    fn plot_inside(&mut self, _canvas: &Canvas, x: usize, y: usize) {
        let paint = self.paint;
        running_layer(&mut self.layer, "solid", "plot_inside").set(x, y, paint);
    }

    fn plot_border(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        running_layer(&mut self.layer, "solid", "plot_border");
    }

    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid) {
        assert_same_size(self.name(), canvas, marks);
        let layer = self
            .layer
            .take()
            .unwrap_or_else(|| panic!("solid filler: finish called before start"));
        layer.composite_onto(canvas);
    }
}
