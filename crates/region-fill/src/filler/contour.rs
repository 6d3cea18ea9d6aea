//! Contour gradient shading.
//!
//! Both fillers ignore the pass callbacks and do all their work in
//! `finish`: for every marked pixel they cast the rays of the configured
//! [`RayFan`](crate::RayFan) in both directions, measure how many steps stay
//! inside the region, and average the shape function over all rays that
//! moved at least once.
//!
//! Rays march in 16.16 fixed point from the pixel center, which keeps the
//! stepping identical on every platform.

use super::{assert_idle, assert_same_size, Filler};
use crate::canvas::{Canvas, MarkGrid};
use crate::color::Argb;
use crate::gradient::GradientSpec;

const FIXED_ONE: f64 = (1 << 16) as f64;
const FIXED_HALF: i64 = 1 << 15;

/// One ray direction in 16.16 fixed point.
#[derive(Debug, Clone, Copy)]
struct RayStep {
    dx: i64,
    dy: i64,
}

impl RayStep {
    fn from_angle(angle: f64) -> Self {
        // Truncation toward zero keeps opposite rays exact mirrors
        Self {
            dx: (angle.cos() * FIXED_ONE) as i64,
            dy: (angle.sin() * FIXED_ONE) as i64,
        }
    }

    fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Steps taken from `(x, y)` before leaving the marked region.
///
/// The walk is capped at `width + height` steps.
fn seek(marks: &MarkGrid, x: usize, y: usize, step: RayStep) -> u32 {
    let budget = (marks.width() + marks.height()) as u32;
    let mut xx = ((x as i64) << 16) + FIXED_HALF;
    let mut yy = ((y as i64) << 16) + FIXED_HALF;

    for n in 0..budget {
        xx += step.dx;
        yy += step.dy;
        if !marks.is_marked(xx >> 16, yy >> 16) {
            return n;
        }
    }
    budget
}

/// Sum of shape values and the number of rays that contributed.
fn sample_rays(
    marks: &MarkGrid,
    x: usize,
    y: usize,
    spec: &GradientSpec,
    rays: &[RayStep],
) -> (f64, u32) {
    let shape = spec.shape_function();
    let mut sum = 0.0;
    let mut div = 0;

    for &ray in rays {
        let l1 = seek(marks, x, y, ray);
        let l2 = seek(marks, x, y, ray.reversed());
        if l1 + l2 != 0 {
            sum += shape.eval(l1, l2);
            div += 1;
        }
    }
    (sum, div)
}

/// Run the ray sampling over every marked pixel and write `shade`'s result.
fn shade_marked<F>(canvas: &mut Canvas, marks: &MarkGrid, spec: &GradientSpec, shade: F)
where
    F: Fn(Argb, f64, u32) -> Argb,
{
    let rays: Vec<RayStep> = spec
        .ray_fan()
        .angles()
        .into_iter()
        .map(RayStep::from_angle)
        .collect();

    tracing::debug!(
        pixels = marks.count(),
        rays = rays.len(),
        "shading contour region"
    );

    for (x, y) in marks.iter_marked() {
        let (sum, div) = sample_rays(marks, x, y, spec, &rays);
        let old = canvas.pixel(x, y);
        canvas.set(x, y, shade(old, sum, div));
    }
}

/// Replaces every region pixel by a gradient color chosen from its position
/// between the region's edges.
///
/// # Example
///
/// ```
/// use region_fill::{fill, Argb, Canvas, ContourFill, GradientSpec, Tolerance};
///
/// let mut canvas = Canvas::new(9, 9, Argb::WHITE);
/// let mut filler = ContourFill::new(GradientSpec::new(Argb::BLACK, Argb::WHITE));
/// fill(&mut canvas, 4, 4, Tolerance::exact(), Argb::BLACK, Argb::TRANSPARENT, &mut filler);
///
/// // The center lies farthest from every edge
/// assert!(canvas.pixel(4, 4).brightness() > canvas.pixel(0, 4).brightness());
/// ```
#[derive(Debug, Clone)]
pub struct ContourFill {
    gradient: GradientSpec,
    running: bool,
}

impl ContourFill {
    pub fn new(gradient: GradientSpec) -> Self {
        Self {
            gradient,
            running: false,
        }
    }

    pub fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }
}

impl Filler for ContourFill {
    fn name(&self) -> &'static str {
        "contour"
    }

    fn start(&mut self, _canvas: &Canvas, _paint: Argb) {
        assert_idle(self.running, self.name());
        self.running = true;
    }

    fn plot_inside(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        assert!(
            self.running,
            "contour filler: plot_inside called before start"
        );
    }

    fn plot_border(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        assert!(
            self.running,
            "contour filler: plot_border called before start"
        );
    }

    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid) {
        assert!(self.running, "contour filler: finish called before start");
        assert_same_size(self.name(), canvas, marks);
        self.running = false;

        let gradient = self.gradient;
        shade_marked(canvas, marks, &gradient, |_, sum, div| {
            let average = if div == 0 { 0.0 } else { sum / div as f64 };
            gradient.color_at(average)
        });
    }
}

/// Keeps the region's own colors and only rescales their brightness.
///
/// The gradient endpoints contribute their perceived brightness `b1` and
/// `b2`. With `a` the ray average, each pixel is scaled by
/// `(b1 + 2a * (b2 - b1)) / 255`, so the peak of a Vee shape lands at twice
/// the brightness range.
#[derive(Debug, Clone)]
pub struct ContourBrightnessFill {
    gradient: GradientSpec,
    running: bool,
}

impl ContourBrightnessFill {
    pub fn new(gradient: GradientSpec) -> Self {
        Self {
            gradient,
            running: false,
        }
    }

    pub fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }
}

impl Filler for ContourBrightnessFill {
    fn name(&self) -> &'static str {
        "shade"
    }

    fn start(&mut self, _canvas: &Canvas, _paint: Argb) {
        assert_idle(self.running, self.name());
        self.running = true;
    }

    fn plot_inside(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        assert!(
            self.running,
            "shade filler: plot_inside called before start"
        );
    }

    fn plot_border(&mut self, _canvas: &Canvas, _x: usize, _y: usize) {
        assert!(
            self.running,
            "shade filler: plot_border called before start"
        );
    }

    fn finish(&mut self, canvas: &mut Canvas, marks: &MarkGrid) {
        assert!(self.running, "shade filler: finish called before start");
        assert_same_size(self.name(), canvas, marks);
        self.running = false;

        let b1 = self.gradient.start_color().brightness() as f64;
        let b2 = self.gradient.end_color().brightness() as f64;

        shade_marked(canvas, marks, &self.gradient, |old, sum, div| {
            let f = if div == 0 { 0.0 } else { sum * 2.0 / div as f64 };
            old.change_brightness((b1 + f * (b2 - b1)) / 255.0)
        });
    }
}
