//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use region_fill::{Argb, Canvas};

/// Assert every pixel inside `[x0, x1) x [y0, y1)` has the expected color
pub fn assert_rect(canvas: &Canvas, x0: usize, y0: usize, x1: usize, y1: usize, expected: Argb) {
    for y in y0..y1 {
        for x in x0..x1 {
            assert_eq!(
                canvas.pixel(x, y),
                expected,
                "Unexpected color at ({x}, {y})"
            );
        }
    }
}

/// Assert two canvases differ exactly in the given pixels
pub fn assert_changed_pixels(before: &Canvas, after: &Canvas, expected: &[(usize, usize)]) {
    assert_eq!(before.width(), after.width(), "Width changed");
    assert_eq!(before.height(), after.height(), "Height changed");

    let mut changed = Vec::new();
    for y in 0..before.height() {
        for x in 0..before.width() {
            if before.pixel(x, y) != after.pixel(x, y) {
                changed.push((x, y));
            }
        }
    }

    let mut expected = expected.to_vec();
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(changed, expected, "Changed pixels differ");
}

/// Count pixels of a given color
pub fn count_color(canvas: &Canvas, color: Argb) -> usize {
    canvas.pixels().iter().filter(|&&c| c == color).count()
}
