//! Test fixtures and constants.

use region_fill::{Argb, Canvas};

/// Colors used by the fixture images
pub mod colors {
    use region_fill::Argb;

    /// Background of the fixture sprites
    pub const PAPER: Argb = Argb(0xFFF0_E8D0);

    /// Main body color of the sprite
    pub const BODY: Argb = Argb(0xFF30_6090);

    /// Body color shifted by one red step
    pub const BODY_SHADE: Argb = Argb(0xFF31_6090);

    /// Paint used by solid and outline fills
    pub const PAINT: Argb = Argb(0xFFE0_2020);
}

/// 16x12 sprite: a 6x4 body at (4, 3) on paper, with its right column one
/// shade off the body color.
pub fn sprite() -> Canvas {
    let mut canvas = Canvas::new(16, 12, colors::PAPER);
    for y in 3..7 {
        for x in 4..10 {
            canvas.set(x, y, colors::BODY);
        }
        canvas.set(9, y, colors::BODY_SHADE);
    }
    canvas
}

/// Filled disc on paper
pub fn disc(size: usize, radius: i64, color: Argb) -> Canvas {
    let mut canvas = Canvas::new(size, size, colors::PAPER);
    let center = (size / 2) as i64;
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let (dx, dy) = (x - center, y - center);
            if dx * dx + dy * dy <= radius * radius {
                canvas.set(x as usize, y as usize, color);
            }
        }
    }
    canvas
}

/// Sprite on a transparent background with two touching parts of
/// different colors
pub fn transparent_sprite() -> Canvas {
    let mut canvas = Canvas::new(8, 8, Argb::TRANSPARENT);
    for y in 1..4 {
        for x in 1..7 {
            canvas.set(x, y, colors::BODY);
        }
    }
    for y in 4..7 {
        for x in 3..5 {
            canvas.set(x, y, colors::PAINT);
        }
    }
    canvas
}
