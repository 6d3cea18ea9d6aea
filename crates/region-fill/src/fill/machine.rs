//! Two-pass scanline seed fill.
//!
//! A pass pops a pending pixel, extends it to the longest run of unvisited
//! fillable pixels along its scan axis, reports the run to the filler and
//! queues both neighbours across the axis for every pixel of the run. The
//! pending pixels live on an explicit LIFO stack; children are pushed in
//! reverse, so the visiting order is that of the depth-first recursion
//!
//! ```text
//! for i in lo..=hi { grow(i, across + first); grow(i, across - first) }
//! ```
//!
//! without its call depth.

use crate::canvas::{Canvas, MarkGrid};
use crate::color::Argb;
use crate::filler::{Filler, Pass};

use super::{FillContext, Tolerance};

/// Counts gathered during one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Pixels marked by the horizontal pass.
    pub horizontal_marked: usize,
    /// Pixels marked by the vertical pass.
    pub vertical_marked: usize,
    /// Line callbacks over both passes.
    pub lines: usize,
}

impl FillReport {
    /// True when no pixel joined the region.
    pub fn is_empty(&self) -> bool {
        self.horizontal_marked == 0 && self.vertical_marked == 0
    }
}

/// Seed fill engine configured with a membership rule.
///
/// # Example
///
/// ```
/// use region_fill::{Argb, Canvas, Fillmachine, OutlineFill, Tolerance};
///
/// let mut canvas = Canvas::new(5, 5, Argb::WHITE);
/// let machine = Fillmachine::new(Tolerance::exact(), Argb::TRANSPARENT);
/// let report = machine.fill(&mut canvas, 2, 2, Argb::BLACK, &mut OutlineFill::new());
///
/// assert_eq!(report.vertical_marked, 25);
/// assert_eq!(canvas.pixel(0, 2), Argb::BLACK);
/// assert_eq!(canvas.pixel(2, 2), Argb::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fillmachine {
    tolerance: Tolerance,
    background: Argb,
}

impl Fillmachine {
    /// `background` only matters when `tolerance` is negative.
    pub fn new(tolerance: Tolerance, background: Argb) -> Self {
        Self {
            tolerance,
            background,
        }
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[inline]
    pub fn background(&self) -> Argb {
        self.background
    }

    /// Discover the region around the seed and let `filler` process it.
    ///
    /// The filler is started once, sees both passes and is finished with the
    /// vertical pass' mark grid. A seed outside the canvas yields an empty
    /// region; a canvas without pixels skips the filler entirely.
    pub fn fill(
        &self,
        canvas: &mut Canvas,
        seed_x: i64,
        seed_y: i64,
        paint: Argb,
        filler: &mut dyn Filler,
    ) -> FillReport {
        if canvas.is_empty() {
            tracing::debug!(
                width = canvas.width(),
                height = canvas.height(),
                "empty canvas, nothing to fill"
            );
            return FillReport::default();
        }

        tracing::debug!(
            seed_x,
            seed_y,
            tolerance = %self.tolerance,
            filler = filler.name(),
            "fill started"
        );

        filler.start(canvas, paint);

        let mut report = FillReport::default();
        let marks = match canvas.get(seed_x, seed_y) {
            Some(area) => {
                let context = FillContext::new(area, self.tolerance, self.background);

                filler.begin_pass(Pass::Horizontal);
                let horizontal = PassScan::new(canvas, &context, Pass::Horizontal);
                let (marks, lines) = horizontal.run(seed_x, seed_y, filler);
                report.horizontal_marked = marks.count();
                report.lines += lines;

                filler.begin_pass(Pass::Vertical);
                let vertical = PassScan::new(canvas, &context, Pass::Vertical);
                let (marks, lines) = vertical.run(seed_y, seed_x, filler);
                report.vertical_marked = marks.count();
                report.lines += lines;
                marks
            }
            None => {
                tracing::debug!(seed_x, seed_y, "seed outside canvas");
                MarkGrid::new(canvas.width(), canvas.height())
            }
        };

        filler.finish(canvas, &marks);

        tracing::debug!(
            horizontal = report.horizontal_marked,
            vertical = report.vertical_marked,
            lines = report.lines,
            "fill finished"
        );
        report
    }
}

/// Fill the region around `(seed_x, seed_y)` in one call.
///
/// Shorthand for [`Fillmachine::new`] followed by [`Fillmachine::fill`].
pub fn fill(
    canvas: &mut Canvas,
    seed_x: i64,
    seed_y: i64,
    tolerance: Tolerance,
    foreground: Argb,
    background: Argb,
    filler: &mut dyn Filler,
) -> FillReport {
    Fillmachine::new(tolerance, background).fill(canvas, seed_x, seed_y, foreground, filler)
}

/// State of a single pass.
///
/// Coordinates are expressed as `(along, across)`: `along` runs with the
/// scan direction, `across` is the axis the region grows over.
struct PassScan<'a> {
    canvas: &'a Canvas,
    context: &'a FillContext,
    pass: Pass,
    marks: MarkGrid,
    lines: usize,
}

impl<'a> PassScan<'a> {
    fn new(canvas: &'a Canvas, context: &'a FillContext, pass: Pass) -> Self {
        Self {
            canvas,
            context,
            pass,
            marks: MarkGrid::new(canvas.width(), canvas.height()),
            lines: 0,
        }
    }

    #[inline]
    fn to_xy(&self, along: i64, across: i64) -> (i64, i64) {
        match self.pass {
            Pass::Horizontal => (along, across),
            Pass::Vertical => (across, along),
        }
    }

    /// In bounds, unvisited and fillable.
    #[inline]
    fn grows(&self, along: i64, across: i64) -> bool {
        let (x, y) = self.to_xy(along, across);
        match self.canvas.get(x, y) {
            Some(color) => !self.marks.is_marked(x, y) && self.context.is_fillable(color),
            None => false,
        }
    }

    /// Only called on coordinates that passed [`grows`](Self::grows).
    #[inline]
    fn pixel(&self, along: i64, across: i64) -> (usize, usize) {
        let (x, y) = self.to_xy(along, across);
        (x as usize, y as usize)
    }

    fn claim(&mut self, along: i64, across: i64, filler: &mut dyn Filler) {
        let (x, y) = self.pixel(along, across);
        self.marks.mark(x, y);
        filler.plot_inside(self.canvas, x, y);
    }

    fn run(
        mut self,
        seed_along: i64,
        seed_across: i64,
        filler: &mut dyn Filler,
    ) -> (MarkGrid, usize) {
        // Horizontal grows downwards first, vertical leftwards first
        let first = match self.pass {
            Pass::Horizontal => 1,
            Pass::Vertical => -1,
        };

        let mut pending = vec![(seed_along, seed_across)];
        while let Some((along, across)) = pending.pop() {
            if !self.grows(along, across) {
                continue;
            }

            let mut lo = along;
            while self.grows(lo, across) {
                self.claim(lo, across, filler);
                lo -= 1;
            }
            lo += 1;
            let (bx, by) = self.pixel(lo, across);
            filler.plot_border(self.canvas, bx, by);

            let mut hi = along + 1;
            while self.grows(hi, across) {
                self.claim(hi, across, filler);
                hi += 1;
            }
            hi -= 1;
            let (ex, ey) = self.pixel(hi, across);
            filler.plot_border(self.canvas, ex, ey);

            filler.plot_line(bx, by, ex, ey);
            self.lines += 1;

            for i in (lo..=hi).rev() {
                pending.push((i, across - first));
                pending.push((i, across + first));
            }
        }

        (self.marks, self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filler::SolidFill;

    /// Records every callback in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        finished_with: Option<usize>,
    }

    impl Filler for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn start(&mut self, _canvas: &Canvas, _paint: Argb) {
            self.events.push("start".to_string());
        }

        fn begin_pass(&mut self, pass: Pass) {
            self.events.push(format!("{pass:?}"));
        }

        fn plot_inside(&mut self, _canvas: &Canvas, x: usize, y: usize) {
            self.events.push(format!("in {x},{y}"));
        }

        fn plot_border(&mut self, _canvas: &Canvas, x: usize, y: usize) {
            self.events.push(format!("border {x},{y}"));
        }

        fn plot_line(&mut self, x: usize, y: usize, x2: usize, y2: usize) {
            self.events.push(format!("line {x},{y}-{x2},{y2}"));
        }

        fn finish(&mut self, _canvas: &mut Canvas, marks: &MarkGrid) {
            self.finished_with = Some(marks.count());
            self.events.push("finish".to_string());
        }
    }

    #[test]
    fn test_callback_order_on_small_block() {
        let mut canvas = Canvas::new(2, 2, Argb::WHITE);
        let mut recorder = Recorder::default();

        fill(
            &mut canvas,
            1,
            0,
            Tolerance::exact(),
            Argb::BLACK,
            Argb::TRANSPARENT,
            &mut recorder,
        );

        let expected = vec![
            "start",
            "Horizontal",
            "in 1,0",
            "in 0,0",
            "border 0,0",
            "border 1,0",
            "line 0,0-1,0",
            "in 0,1",
            "border 0,1",
            "in 1,1",
            "border 1,1",
            "line 0,1-1,1",
            "Vertical",
            "in 1,0",
            "border 1,0",
            "in 1,1",
            "border 1,1",
            "line 1,0-1,1",
            "in 0,0",
            "border 0,0",
            "in 0,1",
            "border 0,1",
            "line 0,0-0,1",
            "finish",
        ];
        assert_eq!(recorder.events, expected);
        assert_eq!(recorder.finished_with, Some(4));
    }

    /// Depth-first scan recursing where the worklist pushes.
    fn grow_recursively(
        scan: &mut PassScan<'_>,
        along: i64,
        across: i64,
        first: i64,
        filler: &mut Recorder,
    ) {
        if !scan.grows(along, across) {
            return;
        }
        let canvas = scan.canvas;

        let mut lo = along;
        while scan.grows(lo, across) {
            scan.claim(lo, across, filler);
            lo -= 1;
        }
        lo += 1;
        let (bx, by) = scan.pixel(lo, across);
        filler.plot_border(canvas, bx, by);

        let mut hi = along + 1;
        while scan.grows(hi, across) {
            scan.claim(hi, across, filler);
            hi += 1;
        }
        hi -= 1;
        let (ex, ey) = scan.pixel(hi, across);
        filler.plot_border(canvas, ex, ey);
        filler.plot_line(bx, by, ex, ey);

        for i in lo..=hi {
            grow_recursively(scan, i, across + first, first, filler);
            grow_recursively(scan, i, across - first, first, filler);
        }
    }

    fn recursive_events(canvas: &Canvas, seed_x: i64, seed_y: i64) -> Vec<String> {
        let mut recorder = Recorder::default();
        let context = FillContext::new(
            canvas.pixel(seed_x as usize, seed_y as usize),
            Tolerance::exact(),
            Argb::TRANSPARENT,
        );

        recorder.start(canvas, Argb::BLACK);
        recorder.begin_pass(Pass::Horizontal);
        let mut horizontal = PassScan::new(canvas, &context, Pass::Horizontal);
        grow_recursively(&mut horizontal, seed_x, seed_y, 1, &mut recorder);

        recorder.begin_pass(Pass::Vertical);
        let mut vertical = PassScan::new(canvas, &context, Pass::Vertical);
        grow_recursively(&mut vertical, seed_y, seed_x, -1, &mut recorder);

        let mut scratch = canvas.clone();
        recorder.finish(&mut scratch, &vertical.marks);
        recorder.events
    }

    #[test]
    fn test_worklist_visits_like_recursion() {
        let palette = [Argb::WHITE, Argb::BLACK, Argb::opaque(200, 0, 0)];
        let mut state: u32 = 0x2545_F491;
        let mut next = move |bound: usize| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((state >> 16) as usize) % bound
        };

        for _ in 0..200 {
            let (width, height) = (9, 8);
            // Bias towards white so regions are large and branchy
            let pixels: Vec<Argb> = (0..width * height)
                .map(|_| palette[next(5).saturating_sub(2)])
                .collect();
            let canvas = Canvas::from_pixels(width, height, pixels).unwrap();
            let seed_x = next(width) as i64;
            let seed_y = next(height) as i64;

            let mut recorder = Recorder::default();
            fill(
                &mut canvas.clone(),
                seed_x,
                seed_y,
                Tolerance::exact(),
                Argb::BLACK,
                Argb::TRANSPARENT,
                &mut recorder,
            );

            assert_eq!(
                recorder.events,
                recursive_events(&canvas, seed_x, seed_y),
                "seed ({seed_x}, {seed_y}) on {canvas:?}"
            );
        }
    }

    #[test]
    fn test_report_counts() {
        let mut canvas = Canvas::new(4, 3, Argb::WHITE);
        let report = fill(
            &mut canvas,
            0,
            0,
            Tolerance::exact(),
            Argb::BLACK,
            Argb::TRANSPARENT,
            &mut SolidFill::new(),
        );

        assert_eq!(report.horizontal_marked, 12);
        assert_eq!(report.vertical_marked, 12);
        // Three rows, then four columns
        assert_eq!(report.lines, 7);
    }

    #[test]
    fn test_out_of_bounds_seed_still_finishes() {
        let mut canvas = Canvas::new(3, 3, Argb::WHITE);
        let mut recorder = Recorder::default();

        let report = fill(
            &mut canvas,
            -1,
            5,
            Tolerance::exact(),
            Argb::BLACK,
            Argb::TRANSPARENT,
            &mut recorder,
        );

        assert!(report.is_empty());
        assert_eq!(recorder.events, vec!["start", "finish"]);
        assert_eq!(recorder.finished_with, Some(0));
    }

    #[test]
    fn test_empty_canvas_skips_filler() {
        let mut canvas = Canvas::new(0, 4, Argb::WHITE);
        let mut recorder = Recorder::default();

        let report = fill(
            &mut canvas,
            0,
            0,
            Tolerance::exact(),
            Argb::BLACK,
            Argb::TRANSPARENT,
            &mut recorder,
        );

        assert_eq!(report, FillReport::default());
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_long_snake_does_not_overflow() {
        // Serpentine corridor one pixel wide, the worst case for recursion
        let size = 401;
        let wall = Argb::BLACK;
        let mut pixels = vec![Argb::WHITE; size * size];
        for y in (1..size).step_by(2) {
            for x in 0..size {
                pixels[y * size + x] = wall;
            }
            let gap = if (y / 2) % 2 == 0 { size - 1 } else { 0 };
            pixels[y * size + gap] = Argb::WHITE;
        }
        let mut canvas = Canvas::from_pixels(size, size, pixels).unwrap();
        let open = canvas
            .pixels()
            .iter()
            .filter(|&&c| c == Argb::WHITE)
            .count();

        let report = fill(
            &mut canvas,
            0,
            0,
            Tolerance::exact(),
            Argb::opaque(255, 0, 0),
            Argb::TRANSPARENT,
            &mut SolidFill::new(),
        );

        assert_eq!(report.horizontal_marked, open);
        assert_eq!(report.vertical_marked, open);
        assert!(canvas.pixels().iter().all(|&c| c != Argb::WHITE));
    }
}
