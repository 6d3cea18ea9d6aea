//! Angular sampling parameters for contour shading.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::GradientError;

/// Which ray directions the contour fillers sample.
///
/// Angles run from `start_angle` in increments of `angle_step` while they
/// stay below π. Every sampled angle is cast in both directions, so half a
/// turn covers the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayFan {
    start_angle: f64,
    angle_step: f64,
}

impl RayFan {
    /// A single horizontal ray pair.
    pub const HORIZONTAL: RayFan = RayFan {
        start_angle: 0.0,
        angle_step: PI,
    };

    /// A single vertical ray pair.
    pub const VERTICAL: RayFan = RayFan {
        start_angle: PI / 2.0,
        angle_step: PI,
    };

    /// A single ray pair along the rising diagonal.
    pub const DIAGONAL_UP: RayFan = RayFan {
        start_angle: PI / 4.0,
        angle_step: PI,
    };

    /// A single ray pair along the falling diagonal.
    pub const DIAGONAL_DOWN: RayFan = RayFan {
        start_angle: PI * 3.0 / 4.0,
        angle_step: PI,
    };

    /// 24 evenly spaced ray pairs, offset by half a step. Follows the outline
    /// of the region in every direction.
    pub const CONTOUR: RayFan = RayFan {
        start_angle: PI / 48.0,
        angle_step: PI / 24.0,
    };

    /// Named presets, in the order `list` output shows them.
    pub const PRESETS: [(&'static str, RayFan); 5] = [
        ("horizontal", RayFan::HORIZONTAL),
        ("vertical", RayFan::VERTICAL),
        ("diagonal-up", RayFan::DIAGONAL_UP),
        ("diagonal-down", RayFan::DIAGONAL_DOWN),
        ("contour", RayFan::CONTOUR),
    ];

    /// Validate and build a fan.
    ///
    /// # Errors
    ///
    /// - [`GradientError::InvalidStartAngle`] unless `0 <= start_angle < π`
    /// - [`GradientError::InvalidAngleStep`] unless `0 < angle_step <= π`
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::PI;
    /// use region_fill::RayFan;
    ///
    /// let fan = RayFan::new(0.0, PI / 2.0).unwrap();
    /// assert_eq!(fan.angles(), vec![0.0, PI / 2.0]);
    ///
    /// assert!(RayFan::new(0.0, 0.0).is_err());
    /// ```
    pub fn new(start_angle: f64, angle_step: f64) -> Result<Self, GradientError> {
        if !start_angle.is_finite() || !(0.0..PI).contains(&start_angle) {
            return Err(GradientError::InvalidStartAngle(start_angle));
        }
        if !angle_step.is_finite() || angle_step <= 0.0 || angle_step > PI {
            return Err(GradientError::InvalidAngleStep(angle_step));
        }
        Ok(Self {
            start_angle,
            angle_step,
        })
    }

    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[inline]
    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }

    /// Sampled angles in radians.
    ///
    /// Built by repeated addition, so the last angle carries the same
    /// accumulated rounding a running loop would.
    pub fn angles(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut r = self.start_angle;
        while r < PI {
            out.push(r);
            r += self.angle_step;
        }
        out
    }

    /// Preset name, if this fan equals one.
    pub fn preset_name(&self) -> Option<&'static str> {
        RayFan::PRESETS
            .iter()
            .find(|(_, fan)| fan == self)
            .map(|(name, _)| *name)
    }
}

impl Default for RayFan {
    fn default() -> Self {
        RayFan::CONTOUR
    }
}

impl fmt::Display for RayFan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "start={:.4} step={:.4}", self.start_angle, self.angle_step),
        }
    }
}

impl FromStr for RayFan {
    type Err = GradientError;

    /// Parse a preset name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        RayFan::PRESETS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, fan)| *fan)
            .ok_or_else(|| GradientError::UnknownRayFan(s.to_string()))
    }
}
