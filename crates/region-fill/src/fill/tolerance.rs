//! Region membership: tolerance and the fillable-pixel predicate.

use std::fmt;

use crate::color::Argb;

/// Color distance threshold for region membership.
///
/// Non-negative values compare each pixel against the seed color with
/// [`Argb::diff`], inclusive. Any negative value switches to background
/// exclusion, where every visible pixel that differs from the background
/// belongs to the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tolerance(i32);

impl Tolerance {
    /// Distance units per step of an editor tolerance spinner.
    pub const STEP: i32 = 500;

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Only pixels identical to the seed color.
    pub const fn exact() -> Self {
        Self(0)
    }

    /// Everything that is neither background nor fully transparent.
    pub const fn background_exclusion() -> Self {
        Self(-1)
    }

    /// Tolerance from spinner steps, `steps * 500`, saturating.
    ///
    /// ```
    /// use region_fill::Tolerance;
    /// assert_eq!(Tolerance::from_steps(3).value(), 1500);
    /// ```
    pub const fn from_steps(steps: u32) -> Self {
        let steps = if steps > i32::MAX as u32 {
            i32::MAX
        } else {
            steps as i32
        };
        Self(steps.saturating_mul(Self::STEP))
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_background_exclusion(self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Tolerance {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_background_exclusion() {
            f.write_str("background-exclusion")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Everything the membership test needs for one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillContext {
    /// Seed pixel color.
    pub area: Argb,
    pub tolerance: Tolerance,
    /// Excluded color in background-exclusion mode.
    pub background: Argb,
}

impl FillContext {
    pub fn new(area: Argb, tolerance: Tolerance, background: Argb) -> Self {
        Self {
            area,
            tolerance,
            background,
        }
    }

    /// Whether a pixel of this color joins the region.
    ///
    /// ```
    /// use region_fill::{Argb, FillContext, Tolerance};
    ///
    /// let ctx = FillContext::new(Argb::WHITE, Tolerance::exact(), Argb::TRANSPARENT);
    /// assert!(ctx.is_fillable(Argb::WHITE));
    /// assert!(!ctx.is_fillable(Argb::BLACK));
    /// ```
    #[inline]
    pub fn is_fillable(&self, color: Argb) -> bool {
        if self.tolerance.is_background_exclusion() {
            color != self.background && !color.is_transparent()
        } else {
            color.diff(self.area) <= self.tolerance.value()
        }
    }
}
