//! Interpolators: blend factor plus two endpoint colors to a result color.

use std::fmt;

use crate::color::Argb;

/// Maps a blend factor and two endpoint colors to an opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolator {
    /// Per-channel RGB lerp.
    #[default]
    Linear,

    /// Remaps `f` to `min(f^2 * 1.08, 1)` before the linear lerp, giving a
    /// curve that stays near the first color and then rises quickly.
    V2,
}

/// Gain applied to the squared factor by [`Interpolator::V2`].
const V2_GAIN: f64 = 1.08;

impl Interpolator {
    /// Blend from `c1` (at `f = 0`) to `c2` (at `f = 1`).
    ///
    /// Each channel is `c1 + round((c2 - c1) * f)` and alpha is forced to
    /// 255. Factors outside `[0, 1]` are clamped and logged.
    ///
    /// # Example
    /// ```
    /// use region_fill::{Argb, Interpolator};
    ///
    /// let c = Interpolator::Linear.interpolate(0.5, Argb::BLACK, Argb::WHITE);
    /// assert_eq!(c, Argb::opaque(128, 128, 128));
    /// ```
    pub fn interpolate(self, f: f64, c1: Argb, c2: Argb) -> Argb {
        let f = clamp_factor(f);

        match self {
            Interpolator::Linear => lerp(f, c1, c2),
            Interpolator::V2 => lerp((f * f * V2_GAIN).min(1.0), c1, c2),
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Interpolator::Linear => "linear",
            Interpolator::V2 => "v2",
        }
    }
}

impl fmt::Display for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn clamp_factor(f: f64) -> f64 {
    if (0.0..=1.0).contains(&f) {
        return f;
    }
    tracing::warn!(factor = f, "gradient factor outside [0, 1], clamping");
    if f.is_nan() {
        0.0
    } else {
        f.clamp(0.0, 1.0)
    }
}

#[inline]
fn lerp(f: f64, c1: Argb, c2: Argb) -> Argb {
    let mix = |a: u8, b: u8| {
        let delta = b as f64 - a as f64;
        (a as f64 + (delta * f).round()) as u8
    };

    Argb::opaque(
        mix(c1.red(), c2.red()),
        mix(c1.green(), c2.green()),
        mix(c1.blue(), c2.blue()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c1() -> Argb {
        Argb::from_channels(0x40, 200, 10, 90)
    }

    fn c2() -> Argb {
        Argb::from_channels(0x00, 20, 250, 90)
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(
            Interpolator::Linear.interpolate(0.0, c1(), c2()),
            c1().with_alpha(255)
        );
        assert_eq!(
            Interpolator::Linear.interpolate(1.0, c1(), c2()),
            c2().with_alpha(255)
        );
    }

    #[test]
    fn test_linear_midpoint_rounds() {
        // 200 -> 20: delta -180 * 0.5 = -90 -> 110
        // 10 -> 250: delta 240 * 0.5 = 120 -> 130
        let mid = Interpolator::Linear.interpolate(0.5, c1(), c2());
        assert_eq!(mid, Argb::opaque(110, 130, 90));
    }

    #[test]
    fn test_v2_endpoints_and_curve() {
        assert_eq!(
            Interpolator::V2.interpolate(0.0, Argb::BLACK, Argb::WHITE),
            Argb::BLACK
        );
        // 1.0 * 1.08 saturates to 1.0
        assert_eq!(
            Interpolator::V2.interpolate(1.0, Argb::BLACK, Argb::WHITE),
            Argb::WHITE
        );
        // 0.5 -> 0.25 * 1.08 = 0.27 -> round(255 * 0.27) = 69
        assert_eq!(
            Interpolator::V2.interpolate(0.5, Argb::BLACK, Argb::WHITE),
            Argb::opaque(69, 69, 69)
        );
    }

    #[test]
    fn test_out_of_range_factor_is_clamped() {
        let lo = Interpolator::Linear.interpolate(-0.5, Argb::BLACK, Argb::WHITE);
        let hi = Interpolator::Linear.interpolate(7.0, Argb::BLACK, Argb::WHITE);
        let nan = Interpolator::Linear.interpolate(f64::NAN, Argb::BLACK, Argb::WHITE);

        assert_eq!(lo, Argb::BLACK);
        assert_eq!(hi, Argb::WHITE);
        assert_eq!(nan, Argb::BLACK);
    }
}
