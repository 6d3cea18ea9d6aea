//! Fillers that only paint the run endpoints of a region.

use super::{assert_idle, assert_same_size, running_layer, Filler, Layer};
use crate::canvas::{Canvas, MarkGrid};
use crate::color::Argb;

/// Paints the border pixels of every run with the foreground color.
///
/// Both passes report borders, so the outline closes on all four sides.
#[derive(Debug, Default)]
pub struct OutlineFill {
    layer: Option<Layer>,
    paint: Argb,
}

impl OutlineFill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filler for OutlineFill {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn start(&mut self, canvas: &Canvas, paint: Argb) {
        assert_idle(self.layer.is_some(), self.name());
        self.layer = Some(Layer::for_canvas(canvas));
        self.paint = paint;
    }

    fn plot_inside(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        running_layer(&mut self.layer, "outline", "plot_inside");
    }

    fn plot_border(&mut self, _canvas: &Canvas, x: usize, y: usize) {
        let paint = self.paint;
        running_layer(&mut self.layer, "outline", "plot_border").set(x, y, paint);
    }

    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid) {
        assert_same_size(self.name(), canvas, marks);
        let layer = self
            .layer
            .take()
            .unwrap_or_else(|| panic!("outline filler: finish called before start"));
        layer.composite_onto(canvas);
    }
}

/// Outline whose pixels mix the existing canvas color with the paint.
///
/// The border pixel becomes `canvas.blend(paint, power)`, so `power` 256
/// keeps the canvas color and 0 uses the paint unchanged.
#[derive(Debug)]
pub struct BlendedOutline {
    power: i32,
    layer: Option<Layer>,
    paint: Argb,
}

impl BlendedOutline {
    /// Highest accepted blend power.
    pub const MAX_POWER: i32 = 256;

    /// Blend with an integer power, clamped to `0..=256`.
    pub fn new(power: i32) -> Self {
        let clamped = power.clamp(0, Self::MAX_POWER);
        if clamped != power {
            tracing::warn!(power, clamped, "blend power out of range");
        }
        Self {
            power: clamped,
            layer: None,
            paint: Argb::default(),
        }
    }

    /// Blend power from a `0..=100` percentage, as `percent * 256 / 100`.
    ///
    /// ```
    /// use region_fill::BlendedOutline;
    ///
    /// assert_eq!(BlendedOutline::from_percent(50).power(), 128);
    /// assert_eq!(BlendedOutline::from_percent(100).power(), 256);
    /// ```
    pub fn from_percent(percent: u32) -> Self {
        let percent = percent.min(100) as i32;
        Self::new(percent * Self::MAX_POWER / 100)
    }

    #[inline]
    pub fn power(&self) -> i32 {
        self.power
    }
}

impl Default for BlendedOutline {
    fn default() -> Self {
        Self::from_percent(50)
    }
}

impl Filler for BlendedOutline {
    fn name(&self) -> &'static str {
        "blend"
    }

    fn start(&mut self, canvas: &Canvas, paint: Argb) {
        assert_idle(self.layer.is_some(), self.name());
        self.layer = Some(Layer::for_canvas(canvas));
        self.paint = paint;
    }

    fn plot_inside(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        running_layer(&mut self.layer, "blend", "plot_inside");
    }

    fn plot_border(&mut self, canvas: &Canvas, x: usize, y: usize) {
        let mixed = canvas.pixel(x, y).blend(self.paint, self.power);
        running_layer(&mut self.layer, "blend", "plot_border").set(x, y, mixed);
    }

    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid) {
        assert_same_size(self.name(), canvas, marks);
        let layer = self
            .layer
            .take()
            .unwrap_or_else(|| panic!("blend filler: finish called before start"));
        layer.composite_onto(canvas);
    }
}
