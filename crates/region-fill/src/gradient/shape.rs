//! Shape functions: two boundary distances to a blend factor.

use std::fmt;

/// Maps the two ray lengths through a pixel to a blend factor.
///
/// `l1` and `l2` are the distances to the region boundary along opposite
/// directions of one ray. All variants return a value in `[0, 1]` for any
/// non-negative input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeFunction {
    /// `l1 / (l1 + l2 + 1)`: ramps from one edge to the other.
    Linear,

    /// Peaks at 1.0 midway between both edges and falls to 0 at either edge.
    #[default]
    Vee,

    /// Like [`Vee`](Self::Vee) over the squared linear factor. The peak moves
    /// towards the far edge, which reads as a highlight.
    V2,
}

impl ShapeFunction {
    /// Evaluate the function for one ray pair.
    ///
    /// # Example
    /// ```
    /// use region_fill::ShapeFunction;
    ///
    /// assert_eq!(ShapeFunction::Linear.eval(0, 0), 0.0);
    /// assert_eq!(ShapeFunction::Linear.eval(3, 0), 0.75);
    /// assert_eq!(ShapeFunction::Vee.eval(1, 2), 0.5);
    /// ```
    #[inline]
    pub fn eval(self, l1: u32, l2: u32) -> f64 {
        let linear = l1 as f64 / (l1 as f64 + l2 as f64 + 1.0);

        match self {
            ShapeFunction::Linear => linear,
            ShapeFunction::Vee => (0.5 - (0.5 - linear).abs()) * 2.0,
            ShapeFunction::V2 => (0.5 - (0.5 - linear * linear).abs()) * 2.0,
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeFunction::Linear => "linear",
            ShapeFunction::Vee => "vee",
            ShapeFunction::V2 => "v2",
        }
    }
}

impl fmt::Display for ShapeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
